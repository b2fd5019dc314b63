use crate::models::work_window::WorkWindow;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/workingHoursCalculator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursRequest {
    /// RFC 3339 timestamp with an explicit offset.
    pub start_time: String,
    pub end_time: String,
    pub work_start_hour: u32,
    pub work_end_hour: u32,
    pub lunch_start_hour: u32,
    pub lunch_end_hour: u32,
    pub deduct_lunch: bool,
    /// Dates (YYYY-MM-DD) not counted as working days.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holidays: Vec<String>,
}

impl WorkingHoursRequest {
    pub fn new(
        start_time: String,
        end_time: String,
        window: WorkWindow,
        holidays: Vec<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            work_start_hour: window.work_start_hour,
            work_end_hour: window.work_end_hour,
            lunch_start_hour: window.lunch_start_hour,
            lunch_end_hour: window.lunch_end_hour,
            deduct_lunch: window.deduct_lunch,
            holidays,
        }
    }

    pub fn window(&self) -> WorkWindow {
        WorkWindow {
            work_start_hour: self.work_start_hour,
            work_end_hour: self.work_end_hour,
            lunch_start_hour: self.lunch_start_hour,
            lunch_end_hour: self.lunch_end_hour,
            deduct_lunch: self.deduct_lunch,
        }
    }
}
