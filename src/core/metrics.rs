//! Body metric formulas: BMI, basal metabolic rate, daily energy
//! expenditure, caloric deficit planning and ideal weight estimates.
//!
//! Everything here is a pure function of its arguments. Height units are
//! part of each parameter name.

use serde::Serialize;

use crate::error::Error;
use crate::models::{ActivityLevel, GoalPace, Sex};

/// Approximate energy content of one kilogram of body fat.
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Midpoint of the "normal" BMI band, used for the BMI-based ideal weight.
const IDEAL_BMI: f64 = 21.5;

const CM_PER_INCH: f64 = 2.54;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    ObesityGradeI,
    ObesityGradeII,
    ObesityGradeIII,
}

impl BmiClass {
    /// Bands are left-closed, right-open.
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => Self::Underweight,
            b if b < 25.0 => Self::Normal,
            b if b < 30.0 => Self::Overweight,
            b if b < 35.0 => Self::ObesityGradeI,
            b if b < 40.0 => Self::ObesityGradeII,
            _ => Self::ObesityGradeIII,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::ObesityGradeI => "obesity grade I",
            Self::ObesityGradeII => "obesity grade II",
            Self::ObesityGradeIII => "obesity grade III",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Underweight => "You are below your ideal weight. Consult a nutritionist.",
            Self::Normal => "Congratulations! You are at a healthy weight.",
            Self::Overweight => "You are overweight. Consider a balanced diet.",
            Self::ObesityGradeI => "Mild obesity. Seek professional guidance.",
            Self::ObesityGradeII => "Moderate obesity. See a doctor.",
            Self::ObesityGradeIII => "Severe obesity. Seek medical help urgently.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub classification: &'static str,
    pub description: &'static str,
}

/// Body mass index. Classification uses the unrounded value.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<BmiResult, Error> {
    if height_m <= 0.0 {
        return Err(Error::InvalidHeight(height_m));
    }
    let value = weight_kg / (height_m * height_m);
    let class = BmiClass::from_bmi(value);
    Ok(BmiResult {
        bmi: round2(value),
        classification: class.label(),
        description: class.description(),
    })
}

/// Basal metabolic rate (Harris-Benedict), kcal/day.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let age = f64::from(age);
    let value = match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    };
    round2(value)
}

/// Total daily energy expenditure, kcal/day.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    round2(bmr * activity.multiplier())
}

#[derive(Debug, Clone, Serialize)]
pub struct DeficitPlan {
    pub tdee: f64,
    pub deficit_percent: f64,
    pub deficit_calories: f64,
    pub daily_calories: f64,
    pub weekly_loss_kg: f64,
}

pub fn deficit_plan(tdee: f64, pace: GoalPace) -> DeficitPlan {
    let fraction = pace.fraction();
    let deficit = tdee * fraction;
    DeficitPlan {
        tdee,
        deficit_percent: fraction * 100.0,
        deficit_calories: round2(deficit),
        daily_calories: round2(tdee - deficit),
        weekly_loss_kg: round2(deficit * 7.0 / KCAL_PER_KG_FAT),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IdealWeight {
    pub devine: f64,
    pub robinson: f64,
    pub miller: f64,
    pub bmi_based: f64,
    pub average: f64,
}

/// Ideal weight estimates in kg.
pub fn ideal_weight(height_m: f64, sex: Sex) -> IdealWeight {
    let over_five_feet = height_m * 100.0 / CM_PER_INCH - 60.0;
    let (devine, robinson, miller) = match sex {
        Sex::Male => (
            50.0 + 2.3 * over_five_feet,
            52.0 + 1.9 * over_five_feet,
            56.2 + 1.41 * over_five_feet,
        ),
        Sex::Female => (
            45.5 + 2.3 * over_five_feet,
            49.0 + 1.7 * over_five_feet,
            53.1 + 1.36 * over_five_feet,
        ),
    };
    let bmi_based = IDEAL_BMI * height_m * height_m;

    IdealWeight {
        devine: round1(devine),
        robinson: round1(robinson),
        miller: round1(miller),
        bmi_based: round1(bmi_based),
        average: round1((devine + robinson + miller + bmi_based) / 4.0),
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
