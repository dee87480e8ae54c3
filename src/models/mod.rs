pub mod config;
pub mod profile;
pub mod weight;

pub use profile::{ActivityLevel, GoalPace, Profile, Sex};
pub use weight::WeightEntry;
