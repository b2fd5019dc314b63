//! Formatting utilities used for CLI output.

/// Whole minutes as `07h 30m` (negative values keep a leading `-`).
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Decimal hours as returned by the service, e.g. `7.50 h`.
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2} h", hours)
}
