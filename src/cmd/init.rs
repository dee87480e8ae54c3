use anyhow::Result;
use chrono::NaiveDate;
use std::io::{self, Write};
use std::str::FromStr;

use slimtrack::core::profile::{self, ProfileInput};
use slimtrack::db::Database;
use slimtrack::models::Sex;
use slimtrack::models::config::Config;

const MAX_RETRIES: u32 = 10;

pub fn run(skip: bool, today: NaiveDate) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if config.aliases.is_empty() {
        config.aliases = Config::default_aliases();
    }

    config.save()?;
    let db = Database::open(&Config::db_path()?)?;

    if skip {
        println!("Config initialized with defaults at {:?}", Config::path()?);
        return Ok(());
    }

    println!("Slimtrack — Initial Setup\n");

    let name = prompt_string("Name")?;
    let age: u32 = prompt_parse("Age (years)")?;
    let sex: Sex = prompt_parse("Sex (m/f)")?;
    let height_cm: f64 = prompt_parse("Height (cm)")?;
    let initial_weight_kg: f64 = prompt_parse("Current weight (kg)")?;
    let target_weight_kg: f64 = prompt_parse("Target weight (kg)")?;
    let activity = prompt_string("Activity (sedentary/light/moderate/intense/very_intense)")?;
    let pace = prompt_string("Pace (slow/moderate/fast)")?;

    profile::save_profile(
        &db,
        &config,
        ProfileInput {
            name: &name,
            age,
            sex,
            height_cm,
            initial_weight_kg,
            target_weight_kg,
            activity: Some(activity.as_str()).filter(|s| !s.is_empty()),
            pace: Some(pace.as_str()).filter(|s| !s.is_empty()),
        },
        today,
    )?;

    println!("\nSetup complete. Data stored in {:?}", Config::data_dir()?);
    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("unexpected end of input");
    }
    Ok(buf.trim().to_string())
}

fn prompt_parse<T: FromStr>(label: &str) -> Result<T> {
    for _ in 0..MAX_RETRIES {
        let s = prompt_string(label)?;
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a valid value."),
        }
    }
    anyhow::bail!("Maximum retry limit exceeded for '{label}'")
}
