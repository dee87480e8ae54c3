use anyhow::Result;
use chrono::NaiveDate;

use slimtrack::core::tracker;
use slimtrack::db::Database;
use slimtrack::models::config::Config;
use slimtrack::output;
use slimtrack::output::human;

pub fn run(today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path()?)?;
    let dashboard = tracker::dashboard(&db, &config, today)?;

    if human_flag {
        println!("{}", human::format_dashboard(&dashboard));
    } else {
        let out = output::success("status", serde_json::to_value(&dashboard)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
