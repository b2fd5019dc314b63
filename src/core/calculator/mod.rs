//! Working-hours arithmetic: interval overlap, day classification and the
//! per-day accumulation that produces a `WorkSummary`.

pub mod days;
pub mod overlap;
pub mod working_hours;
