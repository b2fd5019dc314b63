use serde::{Deserialize, Serialize};

/// Result returned by the calculation service. Displayed as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursResponse {
    pub start_time: String,
    pub end_time: String,
    pub working_hours: f64,
    pub total_days: i64,
    pub working_days: i64,
    pub lunch_deducted: f64,
}

impl WorkingHoursResponse {
    /// Worked hours expressed in whole minutes, for `HHh MMm` rendering.
    pub fn working_minutes(&self) -> i64 {
        (self.working_hours * 60.0).round() as i64
    }

    pub fn lunch_minutes(&self) -> i64 {
        (self.lunch_deducted * 60.0).round() as i64
    }
}
