use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};

use crate::models::{ActivityLevel, GoalPace, Profile, Sex};

use super::Database;

struct ProfileRow {
    name: String,
    age: u32,
    sex: String,
    height_cm: f64,
    initial_weight_kg: f64,
    target_weight_kg: f64,
    activity_level: String,
    goal_pace: Option<String>,
    created_at: String,
}

fn row_to_profile(r: ProfileRow) -> Result<Profile> {
    let created_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.created_at)?.with_timezone(&Utc);
    Ok(Profile {
        name: r.name,
        age: r.age,
        sex: Sex::from_code(&r.sex),
        height_cm: r.height_cm,
        initial_weight_kg: r.initial_weight_kg,
        target_weight_kg: r.target_weight_kg,
        activity_level: ActivityLevel::from_token(&r.activity_level),
        goal_pace: r.goal_pace.as_deref().map(GoalPace::from_token),
        created_at,
    })
}

impl Database {
    pub fn get_profile(&self) -> Result<Option<Profile>> {
        let row = self
            .conn
            .query_row(
                "SELECT name, age, sex, height_cm, initial_weight_kg, target_weight_kg,
                        activity_level, goal_pace, created_at
                 FROM profile WHERE id = 1",
                [],
                |row| {
                    Ok(ProfileRow {
                        name: row.get(0)?,
                        age: row.get(1)?,
                        sex: row.get(2)?,
                        height_cm: row.get(3)?,
                        initial_weight_kg: row.get(4)?,
                        target_weight_kg: row.get(5)?,
                        activity_level: row.get(6)?,
                        goal_pace: row.get(7)?,
                        created_at: row.get(8)?,
                    })
                },
            )
            .optional()?;
        row.map(row_to_profile).transpose()
    }

    /// Overwrite the stored profile.
    pub fn save_profile(&self, p: &Profile) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO profile (id, name, age, sex, height_cm, initial_weight_kg,
                                             target_weight_kg, activity_level, goal_pace, created_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                p.name,
                p.age,
                p.sex.code(),
                p.height_cm,
                p.initial_weight_kg,
                p.target_weight_kg,
                p.activity_level.to_string(),
                p.goal_pace.map(|g| g.to_string()),
                p.created_at.to_rfc3339(),
            ],
        )?;
        tracing::debug!(name = %p.name, "profile saved");
        Ok(())
    }
}
