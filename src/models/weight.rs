use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One weigh-in. `date` is unique across the history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub recorded_at: DateTime<Utc>,
}

impl WeightEntry {
    pub fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            date,
            weight_kg,
            recorded_at: Utc::now(),
        }
    }
}
