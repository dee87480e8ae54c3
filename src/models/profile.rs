use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Biological sex, used only to pick formula coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Lenient decoding kept for stored and legacy data: `M` (any case) is
    /// male, every other code is female.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("m") {
            Self::Male
        } else {
            Self::Female
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(Error::InvalidSex(s.to_string())),
        }
    }
}

/// Physical activity level, mapped to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Intense,
    VeryIntense,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Intense => 1.725,
            Self::VeryIntense => 1.9,
        }
    }

    /// Look up a token, falling back to sedentary for anything unknown.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "sedentary" | "sedentario" => Self::Sedentary,
            "light" | "leve" => Self::Light,
            "moderate" | "moderado" => Self::Moderate,
            "intense" | "intenso" => Self::Intense,
            "very_intense" | "muito_intenso" => Self::VeryIntense,
            other => {
                tracing::warn!(token = other, "unknown activity level, using sedentary");
                Self::Sedentary
            }
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Intense => write!(f, "intense"),
            Self::VeryIntense => write!(f, "very_intense"),
        }
    }
}

/// How aggressive the caloric deficit is.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalPace {
    Slow,
    #[default]
    Moderate,
    Fast,
}

impl GoalPace {
    /// Share of TDEE cut from daily intake.
    pub fn fraction(self) -> f64 {
        match self {
            Self::Slow => 0.10,
            Self::Moderate => 0.20,
            Self::Fast => 0.25,
        }
    }

    /// Look up a token, falling back to moderate for anything unknown.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "slow" | "lento" => Self::Slow,
            "moderate" | "moderado" => Self::Moderate,
            "fast" | "rapido" => Self::Fast,
            other => {
                tracing::warn!(token = other, "unknown goal pace, using moderate");
                Self::Moderate
            }
        }
    }
}

impl std::fmt::Display for GoalPace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slow => write!(f, "slow"),
            Self::Moderate => write!(f, "moderate"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

/// The single user profile. Saved and read wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub initial_weight_kg: f64,
    pub target_weight_kg: f64,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal_pace: Option<GoalPace>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}
