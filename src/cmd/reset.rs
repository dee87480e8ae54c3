use anyhow::Result;
use serde_json::json;

use slimtrack::db::Database;
use slimtrack::models::config::Config;
use slimtrack::output;

pub fn run(yes: bool, human: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete all data without --yes");
    }
    let db = Database::open(&Config::db_path()?)?;
    db.clear_all()?;

    if human {
        println!("All data cleared.");
    } else {
        let out = output::success("reset", json!({ "cleared": true }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
