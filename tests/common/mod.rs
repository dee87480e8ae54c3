#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use slimtrack::db::Database;
use slimtrack::models::{ActivityLevel, GoalPace, Profile, Sex};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A 30 year old, 170 cm man going from 90 to 70 kg at a moderate pace.
pub fn make_profile() -> Profile {
    Profile {
        name: "Ana".into(),
        age: 30,
        sex: Sex::Male,
        height_cm: 170.0,
        initial_weight_kg: 90.0,
        target_weight_kg: 70.0,
        activity_level: ActivityLevel::Sedentary,
        goal_pace: Some(GoalPace::Moderate),
        created_at: Utc::now(),
    }
}
