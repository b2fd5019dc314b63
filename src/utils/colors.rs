/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Grey for empty values ("", "0.00 h", "00h 00m"), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0.00 h" || v == "00h 00m" || v == "0" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_total(value: &str) -> String {
    format!("{GREEN}{value}{RESET}")
}
