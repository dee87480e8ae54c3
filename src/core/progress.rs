use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::core::metrics::{KCAL_PER_KG_FAT, round1, round2};
use crate::error::Error;

#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub weight_lost_kg: f64,
    pub weight_remaining_kg: f64,
    pub percent_complete: f64,
    pub goal_reached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<TimeEstimate>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeEstimate {
    pub days: f64,
    pub weeks: f64,
    pub months: f64,
    pub target_date: NaiveDate,
}

/// How far along the goal the current weight is.
///
/// A target at or above the initial weight counts as 100% complete.
pub fn snapshot(initial_kg: f64, current_kg: f64, target_kg: f64) -> ProgressSnapshot {
    let lost = initial_kg - current_kg;
    let remaining = current_kg - target_kg;
    let total = initial_kg - target_kg;

    let percent = if total > 0.0 {
        lost / total * 100.0
    } else {
        100.0
    };

    ProgressSnapshot {
        weight_lost_kg: round2(lost),
        weight_remaining_kg: round2(remaining),
        percent_complete: round1(percent),
        goal_reached: current_kg <= target_kg,
        time_estimate: None,
    }
}

/// Linear projection of the time needed to burn the remaining weight at a
/// constant daily deficit.
///
/// `days` is rounded to the nearest whole day while `target_date` adds the
/// truncated day count, so the two can differ by one.
pub fn estimate_time_to_goal(
    current_kg: f64,
    target_kg: f64,
    daily_deficit_kcal: f64,
    today: NaiveDate,
) -> Result<TimeEstimate, Error> {
    let remaining = current_kg - target_kg;
    if remaining <= 0.0 {
        return Ok(TimeEstimate {
            days: 0.0,
            weeks: 0.0,
            months: 0.0,
            target_date: today,
        });
    }
    if daily_deficit_kcal <= 0.0 {
        return Err(Error::NoDeficit(daily_deficit_kcal));
    }

    let days = remaining * KCAL_PER_KG_FAT / daily_deficit_kcal;
    let target_date = today
        .checked_add_days(Days::new(days.trunc() as u64))
        .unwrap_or(NaiveDate::MAX);

    Ok(TimeEstimate {
        days: days.round(),
        weeks: round1(days / 7.0),
        months: round1(days / 30.0),
        target_date,
    })
}
