use anyhow::Result;
use chrono::NaiveDate;

use slimtrack::core::tracker;
use slimtrack::db::Database;
use slimtrack::models::config::Config;
use slimtrack::output;
use slimtrack::output::human;

pub fn run(today: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let report = tracker::progress(&db, today)?;

    if human_flag {
        println!("{}", human::format_progress(&report));
    } else {
        let out = output::success("progress", serde_json::to_value(&report)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
