use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Weekday};

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_holiday(d: NaiveDate, holidays: &[NaiveDate]) -> bool {
    holidays.contains(&d)
}

/// `d` at `hour:00:00` in the given offset.
pub fn at_hour(d: NaiveDate, hour: u32, tz: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    let naive = d.and_hms_opt(hour, 0, 0)?;
    tz.from_local_datetime(&naive).single()
}

/// Whole 24h periods between the two instants, plus the starting day.
pub fn total_days(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> i64 {
    (end - start).num_seconds().max(0) / 86_400 + 1
}
