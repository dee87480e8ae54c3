use anyhow::Result;
use serde_json::json;

use slimtrack::models::config::Config;
use slimtrack::models::{ActivityLevel, GoalPace};
use slimtrack::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{toml_str}");
    } else {
        let out = output::success("config", json!({ "config": config }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "defaults.activity_level" => {
            config.defaults.activity_level = ActivityLevel::from_token(&config.resolve_alias(value));
        }
        "defaults.goal_pace" => {
            config.defaults.goal_pace = GoalPace::from_token(&config.resolve_alias(value));
        }
        "dashboard.recent_entries" => config.dashboard.recent_entries = value.parse()?,
        "log.level" => config.log.level = value.to_string(),
        k if k.starts_with("alias.") => {
            let alias = &k["alias.".len()..];
            if alias.is_empty() {
                anyhow::bail!("alias name must not be empty");
            }
            config.aliases.insert(alias.to_string(), value.to_string());
        }
        _ => anyhow::bail!("unknown config key: {key}"),
    }

    config.save()?;
    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
