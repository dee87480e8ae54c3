use slimtrack::core::metrics::{self, BmiClass};
use slimtrack::error::Error;
use slimtrack::models::{ActivityLevel, GoalPace, Sex};

// ── bmi ─────────────────────────────────────────────────────────────────────

#[test]
fn test_bmi_value_and_class() {
    let r = metrics::bmi(70.0, 1.75).unwrap();
    assert!((r.bmi - 22.86).abs() < f64::EPSILON);
    assert_eq!(r.classification, "normal");
    assert_eq!(r.description, BmiClass::Normal.description());
}

#[test]
fn test_bmi_band_boundaries_are_left_closed() {
    let cases = [
        (18.4, "underweight"),
        (18.5, "normal"),
        (24.99, "normal"),
        (25.0, "overweight"),
        (30.0, "obesity grade I"),
        (35.0, "obesity grade II"),
        (39.99, "obesity grade II"),
        (40.0, "obesity grade III"),
        (55.0, "obesity grade III"),
    ];
    for (weight, expected) in cases {
        // height 1 m makes the BMI equal to the weight
        let r = metrics::bmi(weight, 1.0).unwrap();
        assert_eq!(r.classification, expected, "bmi {weight}");
    }
}

#[test]
fn test_bmi_class_from_unrounded_value() {
    // 24.996 rounds to 25.0 for display but is still in the normal band
    let r = metrics::bmi(24.996, 1.0).unwrap();
    assert!((r.bmi - 25.0).abs() < f64::EPSILON);
    assert_eq!(r.classification, "normal");
}

#[test]
fn test_bmi_rejects_zero_height() {
    let err = metrics::bmi(70.0, 0.0).unwrap_err();
    assert!(matches!(err, Error::InvalidHeight(_)));
    assert_eq!(err.code(), "invalid_height");
}

#[test]
fn test_every_class_has_description() {
    for class in [
        BmiClass::Underweight,
        BmiClass::Normal,
        BmiClass::Overweight,
        BmiClass::ObesityGradeI,
        BmiClass::ObesityGradeII,
        BmiClass::ObesityGradeIII,
    ] {
        assert!(!class.description().is_empty());
    }
}

// ── bmr / tdee ──────────────────────────────────────────────────────────────

#[test]
fn test_bmr_male() {
    let bmr = metrics::bmr(70.0, 170.0, 30, Sex::Male);
    assert!((bmr - 1671.67).abs() < 1e-9);
}

#[test]
fn test_bmr_female() {
    let bmr = metrics::bmr(60.0, 165.0, 25, Sex::Female);
    assert!((bmr - 1405.33).abs() < 1e-9);
}

#[test]
fn test_bmr_lenient_sex_code_defaults_to_female() {
    let female = metrics::bmr(70.0, 170.0, 30, Sex::Female);
    assert_eq!(metrics::bmr(70.0, 170.0, 30, Sex::from_code("x")), female);
    assert_eq!(
        metrics::bmr(70.0, 170.0, 30, Sex::from_code("m")),
        metrics::bmr(70.0, 170.0, 30, Sex::Male)
    );
}

#[test]
fn test_tdee_multipliers() {
    assert!((metrics::tdee(1671.67, ActivityLevel::Moderate) - 2591.09).abs() < 1e-9);
    assert!((metrics::tdee(1000.0, ActivityLevel::Sedentary) - 1200.0).abs() < 1e-9);
    assert!((metrics::tdee(1000.0, ActivityLevel::Light) - 1375.0).abs() < 1e-9);
    assert!((metrics::tdee(1000.0, ActivityLevel::Intense) - 1725.0).abs() < 1e-9);
    assert!((metrics::tdee(1000.0, ActivityLevel::VeryIntense) - 1900.0).abs() < 1e-9);
}

#[test]
fn test_tdee_unknown_activity_matches_sedentary() {
    let unknown = metrics::tdee(1405.33, ActivityLevel::from_token("couch"));
    let sedentary = metrics::tdee(1405.33, ActivityLevel::Sedentary);
    assert_eq!(unknown, sedentary);
    assert!((unknown - 1686.4).abs() < 1e-9);
}

// ── deficit ─────────────────────────────────────────────────────────────────

#[test]
fn test_deficit_moderate() {
    let plan = metrics::deficit_plan(2000.0, GoalPace::Moderate);
    assert_eq!(plan.tdee, 2000.0);
    assert_eq!(plan.deficit_percent, 20.0);
    assert_eq!(plan.deficit_calories, 400.0);
    assert_eq!(plan.daily_calories, 1600.0);
    assert_eq!(plan.weekly_loss_kg, 0.36);
}

#[test]
fn test_deficit_slow_and_fast() {
    let slow = metrics::deficit_plan(2000.0, GoalPace::Slow);
    assert_eq!(slow.deficit_percent, 10.0);
    assert_eq!(slow.deficit_calories, 200.0);
    assert_eq!(slow.daily_calories, 1800.0);
    assert_eq!(slow.weekly_loss_kg, 0.18);

    let fast = metrics::deficit_plan(2000.0, GoalPace::Fast);
    assert_eq!(fast.deficit_percent, 25.0);
    assert_eq!(fast.deficit_calories, 500.0);
    assert_eq!(fast.daily_calories, 1500.0);
    assert_eq!(fast.weekly_loss_kg, 0.45);
}

#[test]
fn test_deficit_multiplies_by_fraction() {
    // 1280.15 * 0.1 lands just above the half-cent, 1282.35 * 0.1 just below.
    let up = metrics::deficit_plan(1280.15, GoalPace::Slow);
    assert_eq!(up.deficit_calories, 128.02);
    assert_eq!(up.daily_calories, 1152.14);

    let down = metrics::deficit_plan(1282.35, GoalPace::Slow);
    assert_eq!(down.deficit_calories, 128.23);
    assert_eq!(down.daily_calories, 1154.12);
    assert_eq!(down.deficit_percent, 10.0);
}

#[test]
fn test_deficit_unknown_pace_is_moderate() {
    let plan = metrics::deficit_plan(2000.0, GoalPace::from_token("turbo"));
    assert_eq!(plan.deficit_percent, 20.0);
    assert_eq!(plan.deficit_calories, 400.0);
}

// ── ideal weight ────────────────────────────────────────────────────────────

#[test]
fn test_ideal_weight_male() {
    let w = metrics::ideal_weight(1.80, Sex::Male);
    assert_eq!(w.devine, 75.0);
    assert_eq!(w.robinson, 72.6);
    assert_eq!(w.miller, 71.5);
    assert_eq!(w.bmi_based, 69.7);
    assert_eq!(w.average, 72.2);
}

#[test]
fn test_ideal_weight_female() {
    let w = metrics::ideal_weight(1.65, Sex::Female);
    assert_eq!(w.devine, 56.9);
    assert_eq!(w.robinson, 57.4);
    assert_eq!(w.miller, 59.8);
    assert_eq!(w.bmi_based, 58.5);
    assert_eq!(w.average, 58.2);
}
