//! Time utilities: parsing HH:MM and hour values.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Hours of day accepted by the working window.
pub fn check_hour(h: u32) -> AppResult<u32> {
    if h <= 23 {
        Ok(h)
    } else {
        Err(AppError::InvalidHour(h))
    }
}
