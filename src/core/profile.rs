use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::db::Database;
use crate::models::config::Config;
use crate::models::{Profile, Sex};

/// Fields of a profile as supplied by the user.
pub struct ProfileInput<'a> {
    pub name: &'a str,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub initial_weight_kg: f64,
    pub target_weight_kg: f64,
    pub activity: Option<&'a str>,
    pub pace: Option<&'a str>,
}

/// Replace the stored profile and record the initial weight for `today`.
pub fn save_profile(
    db: &Database,
    config: &Config,
    input: ProfileInput<'_>,
    today: NaiveDate,
) -> Result<Profile> {
    let profile = Profile {
        name: input.name.to_string(),
        age: input.age,
        sex: input.sex,
        height_cm: input.height_cm,
        initial_weight_kg: input.initial_weight_kg,
        target_weight_kg: input.target_weight_kg,
        activity_level: config.activity_level(input.activity),
        goal_pace: Some(config.goal_pace(input.pace)),
        created_at: Utc::now(),
    };
    db.save_profile(&profile)?;
    db.add_weight_entry(profile.initial_weight_kg, Some(today))?;
    Ok(profile)
}
