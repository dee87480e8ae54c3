use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::metrics::{self, BmiResult, DeficitPlan};
use crate::core::progress::{self, ProgressSnapshot};
use crate::db::Database;
use crate::error::Error;
use crate::models::config::Config;
use crate::models::{Profile, WeightEntry};

#[derive(Debug, Serialize)]
pub struct ProgressReport {
    pub initial_weight_kg: f64,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub as_of: NaiveDate,
    #[serde(flatten)]
    pub snapshot: ProgressSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deficit: Option<DeficitPlan>,
}

/// Progress of `latest` against the profile goal.
///
/// The time estimate is only attached when the profile carries a goal pace;
/// the deficit driving it comes from the latest weight, not the initial one.
pub fn progress_for(
    profile: &Profile,
    latest: &WeightEntry,
    today: NaiveDate,
) -> Result<ProgressReport> {
    let current = latest.weight_kg;
    let mut snapshot =
        progress::snapshot(profile.initial_weight_kg, current, profile.target_weight_kg);

    let deficit = match profile.goal_pace {
        Some(pace) => {
            let bmr = metrics::bmr(current, profile.height_cm, profile.age, profile.sex);
            let tdee = metrics::tdee(bmr, profile.activity_level);
            let plan = metrics::deficit_plan(tdee, pace);
            snapshot.time_estimate = Some(progress::estimate_time_to_goal(
                current,
                profile.target_weight_kg,
                plan.deficit_calories,
                today,
            )?);
            Some(plan)
        }
        None => None,
    };

    Ok(ProgressReport {
        initial_weight_kg: profile.initial_weight_kg,
        current_weight_kg: current,
        target_weight_kg: profile.target_weight_kg,
        as_of: latest.date,
        snapshot,
        deficit,
    })
}

fn bare_progress(profile: &Profile, latest: &WeightEntry) -> ProgressReport {
    ProgressReport {
        initial_weight_kg: profile.initial_weight_kg,
        current_weight_kg: latest.weight_kg,
        target_weight_kg: profile.target_weight_kg,
        as_of: latest.date,
        snapshot: progress::snapshot(
            profile.initial_weight_kg,
            latest.weight_kg,
            profile.target_weight_kg,
        ),
        deficit: None,
    }
}

/// Load profile and history and compute progress with a time estimate.
pub fn progress(db: &Database, today: NaiveDate) -> Result<ProgressReport> {
    let profile = db
        .get_profile()?
        .ok_or(Error::InsufficientData("no profile saved"))?;
    let latest = db
        .latest_weight()?
        .ok_or(Error::InsufficientData("no weight recorded"))?;
    progress_for(&profile, &latest, today)
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub profile: Option<Profile>,
    pub progress: Option<ProgressReport>,
    pub bmi: Option<BmiResult>,
    pub recent: Vec<WeightEntry>,
}

/// Overview combining whatever data exists; nothing is required.
pub fn dashboard(db: &Database, config: &Config, today: NaiveDate) -> Result<Dashboard> {
    let profile = db.get_profile()?;
    let history = db.weight_history()?;

    let (progress, bmi) = match (&profile, history.last()) {
        (Some(p), Some(latest)) => {
            let report = match progress_for(p, latest, today) {
                Ok(report) => report,
                Err(err) => {
                    tracing::warn!(error = %err, "time estimate unavailable");
                    bare_progress(p, latest)
                }
            };
            (Some(report), metrics::bmi(latest.weight_kg, p.height_m()).ok())
        }
        _ => (None, None),
    };

    let keep = config.dashboard.recent_entries as usize;
    let recent = history[history.len().saturating_sub(keep)..].to_vec();

    Ok(Dashboard {
        date: today,
        profile,
        progress,
        bmi,
        recent,
    })
}
