pub mod metrics;
pub mod profile;
pub mod progress;
pub mod tracker;
