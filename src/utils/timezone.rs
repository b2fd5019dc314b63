//! Timezone policy for form input.
//!
//! Dates and times typed by the user are wall-clock values in the configured
//! zone. They are serialized as RFC 3339 with that zone's explicit offset;
//! the clock value itself is never shifted.

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimezonePolicy {
    #[default]
    Utc,
    Local,
    Fixed(FixedOffset),
}

impl TimezonePolicy {
    /// Attach this zone to a wall-clock value.
    /// Returns `None` for local times skipped by a DST transition.
    pub fn resolve(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            TimezonePolicy::Utc => Some(Utc.from_utc_datetime(&naive).fixed_offset()),
            TimezonePolicy::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            TimezonePolicy::Fixed(offset) => offset.from_local_datetime(&naive).single(),
        }
    }

    /// Current calendar date in this zone.
    pub fn today(&self) -> NaiveDate {
        match self {
            TimezonePolicy::Utc => Utc::now().date_naive(),
            TimezonePolicy::Local => Local::now().date_naive(),
            TimezonePolicy::Fixed(offset) => Utc::now().with_timezone(offset).date_naive(),
        }
    }
}

/// `2024-01-01T09:00:00Z` / `2024-01-01T09:00:00+02:00`
pub fn to_rfc3339(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_rfc3339(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim()).ok()
}

impl FromStr for TimezonePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utc" | "z" => Ok(TimezonePolicy::Utc),
            "local" => Ok(TimezonePolicy::Local),
            other => parse_offset(other)
                .map(TimezonePolicy::Fixed)
                .ok_or_else(|| format!("'{}' (use utc, local or an offset like +02:00)", s)),
        }
    }
}

/// `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (h, m) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if h > 23 || m > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
}

impl TryFrom<String> for TimezonePolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimezonePolicy> for String {
    fn from(value: TimezonePolicy) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimezonePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezonePolicy::Utc => write!(f, "utc"),
            TimezonePolicy::Local => write!(f, "local"),
            TimezonePolicy::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}
