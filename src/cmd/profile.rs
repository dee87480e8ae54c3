use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use slimtrack::core::profile::{self, ProfileInput};
use slimtrack::db::Database;
use slimtrack::models::Sex;
use slimtrack::models::config::Config;
use slimtrack::output;
use slimtrack::output::human;

use crate::cli::ProfileArgs;

pub fn run_show(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let profile = db.get_profile()?;

    if human_flag {
        match profile {
            Some(ref p) => println!("{}", human::format_profile(p)),
            None => println!("No profile saved."),
        }
    } else {
        let out = output::success("profile", json!({ "profile": profile }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(args: &ProfileArgs, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path()?)?;
    let sex: Sex = args.sex.parse()?;

    let saved = profile::save_profile(
        &db,
        &config,
        ProfileInput {
            name: &args.name,
            age: args.age,
            sex,
            height_cm: args.height,
            initial_weight_kg: args.initial_weight,
            target_weight_kg: args.target_weight,
            activity: args.activity.as_deref(),
            pace: args.pace.as_deref(),
        },
        today,
    )?;

    if human_flag {
        println!("Profile saved.\n{}", human::format_profile(&saved));
    } else {
        let out = output::success("profile", json!({ "profile": saved }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
