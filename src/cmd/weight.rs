use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use slimtrack::db::Database;
use slimtrack::models::config::Config;
use slimtrack::output;
use slimtrack::output::human;

pub fn run_log(weight: f64, date: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let entry = db.add_weight_entry(weight, Some(date))?;

    if human_flag {
        println!("Logged: {}", human::format_entry(&entry));
    } else {
        let out = output::success("log", json!({ "entry": entry }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_history(last: Option<usize>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let mut entries = db.weight_history()?;
    if let Some(n) = last {
        let skip = entries.len().saturating_sub(n);
        entries.drain(..skip);
    }

    if human_flag {
        if entries.is_empty() {
            println!("No weight recorded yet.");
        } else {
            println!("{}", human::history_table(&entries));
        }
    } else {
        let out = output::success("history", json!({ "entries": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_delete(date: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let deleted = db.delete_weight_entry(date)?;

    if human_flag {
        if deleted {
            println!("Deleted entry for {date}");
        } else {
            println!("No entry for {date}");
        }
    } else {
        let out = output::success("delete", json!({ "date": date, "deleted": deleted }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
