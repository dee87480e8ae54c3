mod common;

use chrono::Duration;
use slimtrack::core::profile::{self, ProfileInput};
use slimtrack::core::tracker;
use slimtrack::error::{self, Error};
use slimtrack::models::config::Config;
use slimtrack::models::{ActivityLevel, GoalPace, Sex};

// ── progress ────────────────────────────────────────────────────────────────

#[test]
fn test_progress_requires_profile() {
    let (_dir, db) = common::setup_db();
    db.add_weight_entry(80.0, Some(common::date(2026, 10, 10))).unwrap();

    let err = tracker::progress(&db, common::date(2026, 10, 17)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InsufficientData(_))
    ));
    assert_eq!(error::code_of(&err), "insufficient_data");
}

#[test]
fn test_progress_requires_history() {
    let (_dir, db) = common::setup_db();
    db.save_profile(&common::make_profile()).unwrap();

    let err = tracker::progress(&db, common::date(2026, 10, 17)).unwrap_err();
    assert_eq!(error::code_of(&err), "insufficient_data");
}

#[test]
fn test_progress_with_time_estimate() {
    let (_dir, db) = common::setup_db();
    db.save_profile(&common::make_profile()).unwrap();
    db.add_weight_entry(90.0, Some(common::date(2026, 9, 1))).unwrap();
    db.add_weight_entry(80.0, Some(common::date(2026, 10, 10))).unwrap();

    let today = common::date(2026, 10, 17);
    let report = tracker::progress(&db, today).unwrap();

    assert_eq!(report.current_weight_kg, 80.0);
    assert_eq!(report.as_of, common::date(2026, 10, 10));
    assert_eq!(report.snapshot.percent_complete, 50.0);
    assert!(!report.snapshot.goal_reached);

    // deficit follows the latest weight: BMR 1805.64, TDEE 2166.77
    let plan = report.deficit.as_ref().unwrap();
    assert_eq!(plan.tdee, 2166.77);
    assert_eq!(plan.deficit_calories, 433.35);

    let estimate = report.snapshot.time_estimate.as_ref().unwrap();
    assert_eq!(estimate.days, 178.0);
    assert_eq!(estimate.weeks, 25.4);
    assert_eq!(estimate.months, 5.9);
    assert_eq!(estimate.target_date, today + Duration::days(177));
}

#[test]
fn test_progress_without_pace_has_no_estimate() {
    let (_dir, db) = common::setup_db();
    let mut profile = common::make_profile();
    profile.goal_pace = None;
    db.save_profile(&profile).unwrap();
    db.add_weight_entry(85.0, Some(common::date(2026, 10, 1))).unwrap();

    let report = tracker::progress(&db, common::date(2026, 10, 17)).unwrap();
    assert!(report.deficit.is_none());
    assert!(report.snapshot.time_estimate.is_none());
    assert_eq!(report.snapshot.percent_complete, 25.0);
}

#[test]
fn test_progress_goal_reached_estimate_is_today() {
    let (_dir, db) = common::setup_db();
    db.save_profile(&common::make_profile()).unwrap();
    db.add_weight_entry(69.5, Some(common::date(2026, 10, 1))).unwrap();

    let today = common::date(2026, 10, 17);
    let report = tracker::progress(&db, today).unwrap();
    assert!(report.snapshot.goal_reached);
    let estimate = report.snapshot.time_estimate.unwrap();
    assert_eq!(estimate.days, 0.0);
    assert_eq!(estimate.target_date, today);
}

#[test]
fn test_progress_serializes_flat() {
    let (_dir, db) = common::setup_db();
    db.save_profile(&common::make_profile()).unwrap();
    db.add_weight_entry(80.0, Some(common::date(2026, 10, 10))).unwrap();

    let report = tracker::progress(&db, common::date(2026, 10, 17)).unwrap();
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["percent_complete"], 50.0);
    assert_eq!(v["weight_lost_kg"], 10.0);
    assert_eq!(v["goal_reached"], false);
    assert_eq!(v["time_estimate"]["target_date"], "2027-04-12");
}

// ── dashboard ───────────────────────────────────────────────────────────────

#[test]
fn test_dashboard_empty_store() {
    let (_dir, db) = common::setup_db();
    let d = tracker::dashboard(&db, &Config::default(), common::date(2026, 10, 17)).unwrap();
    assert!(d.profile.is_none());
    assert!(d.progress.is_none());
    assert!(d.bmi.is_none());
    assert!(d.recent.is_empty());
}

#[test]
fn test_dashboard_history_without_profile() {
    let (_dir, db) = common::setup_db();
    db.add_weight_entry(80.0, Some(common::date(2026, 10, 10))).unwrap();

    let d = tracker::dashboard(&db, &Config::default(), common::date(2026, 10, 17)).unwrap();
    assert!(d.progress.is_none());
    assert_eq!(d.recent.len(), 1);
}

#[test]
fn test_dashboard_keeps_last_recent_entries() {
    let (_dir, db) = common::setup_db();
    db.save_profile(&common::make_profile()).unwrap();
    for day in 1..=10 {
        db.add_weight_entry(90.0 - f64::from(day) * 0.5, Some(common::date(2026, 10, day)))
            .unwrap();
    }

    let d = tracker::dashboard(&db, &Config::default(), common::date(2026, 10, 17)).unwrap();
    assert_eq!(d.recent.len(), 7);
    assert_eq!(d.recent[0].date, common::date(2026, 10, 4));
    assert_eq!(d.recent[6].date, common::date(2026, 10, 10));

    let bmi = d.bmi.unwrap();
    assert_eq!(bmi.bmi, 29.41);
    assert_eq!(bmi.classification, "overweight");
    assert_eq!(d.progress.unwrap().current_weight_kg, 85.0);
}

#[test]
fn test_dashboard_survives_non_positive_deficit() {
    let (_dir, db) = common::setup_db();
    let mut p = common::make_profile();
    p.age = 400;
    db.save_profile(&p).unwrap();
    db.add_weight_entry(80.0, Some(common::date(2026, 10, 10))).unwrap();
    let today = common::date(2026, 10, 17);

    let err = tracker::progress(&db, today).unwrap_err();
    assert_eq!(error::code_of(&err), "no_deficit");

    let d = tracker::dashboard(&db, &Config::default(), today).unwrap();
    assert_eq!(d.profile.unwrap().age, 400);
    assert_eq!(d.recent.len(), 1);
    assert!(d.bmi.is_some());

    let progress = d.progress.unwrap();
    assert_eq!(progress.current_weight_kg, 80.0);
    assert_eq!(progress.snapshot.weight_lost_kg, 10.0);
    assert_eq!(progress.snapshot.percent_complete, 50.0);
    assert!(progress.snapshot.time_estimate.is_none());
    assert!(progress.deficit.is_none());
}

// ── save_profile ────────────────────────────────────────────────────────────

#[test]
fn test_save_profile_records_initial_weight() {
    let (_dir, db) = common::setup_db();
    let today = common::date(2026, 10, 17);
    let saved = profile::save_profile(
        &db,
        &Config::default(),
        ProfileInput {
            name: "Ana",
            age: 28,
            sex: Sex::Female,
            height_cm: 165.0,
            initial_weight_kg: 72.0,
            target_weight_kg: 62.0,
            activity: Some("leve"),
            pace: None,
        },
        today,
    )
    .unwrap();

    assert_eq!(saved.activity_level, ActivityLevel::Light);
    assert_eq!(saved.goal_pace, Some(GoalPace::Moderate));
    assert_eq!(db.get_profile().unwrap().unwrap(), saved);

    let history = db.weight_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, today);
    assert_eq!(history[0].weight_kg, 72.0);
}

#[test]
fn test_save_profile_uses_config_defaults() {
    let (_dir, db) = common::setup_db();
    let mut config = Config::default();
    config.defaults.activity_level = ActivityLevel::Intense;
    config.defaults.goal_pace = GoalPace::Slow;
    config.aliases = Config::default_aliases();

    let saved = profile::save_profile(
        &db,
        &config,
        ProfileInput {
            name: "Caio",
            age: 40,
            sex: Sex::Male,
            height_cm: 180.0,
            initial_weight_kg: 100.0,
            target_weight_kg: 85.0,
            activity: None,
            pace: Some("mod"),
        },
        common::date(2026, 10, 17),
    )
    .unwrap();

    assert_eq!(saved.activity_level, ActivityLevel::Intense);
    assert_eq!(saved.goal_pace, Some(GoalPace::Moderate));
}
