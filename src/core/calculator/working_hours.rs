use crate::core::calculator::days::{at_hour, is_holiday, is_weekend, total_days};
use crate::core::calculator::overlap::{hours_between, intersect, overlap_hours};
use crate::errors::RemoteError;
use crate::models::request::WorkingHoursRequest;
use crate::models::response::WorkingHoursResponse;
use crate::models::work_window::WorkWindow;
use crate::utils::date::{dates_between, parse_date};
use crate::utils::timezone::parse_rfc3339;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// Totals accumulated over the working days of a range.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WorkSummary {
    pub working_hours: f64,
    pub working_days: i64,
    pub lunch_deducted: f64,
}

/// Hours inside the daily working window between `start` and `end`.
///
/// Days are taken in the offset of `start`. Weekends and `holidays` are
/// skipped; a day only counts as a working day when its window actually
/// overlaps the range.
pub fn calculate(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    window: &WorkWindow,
    holidays: &[NaiveDate],
) -> WorkSummary {
    let tz = *start.offset();
    let end = end.with_timezone(&tz);
    let mut summary = WorkSummary::default();

    for day in dates_between(start.date_naive(), end.date_naive()) {
        if is_weekend(day) || is_holiday(day, holidays) {
            continue;
        }

        let (Some(work_start), Some(work_end)) = (
            at_hour(day, window.work_start_hour, &tz),
            at_hour(day, window.work_end_hour, &tz),
        ) else {
            continue;
        };

        let Some(period) = intersect((start, end), (work_start, work_end)) else {
            continue;
        };

        let mut hours = hours_between(period.0, period.1);

        if window.deduct_lunch
            && let (Some(lunch_start), Some(lunch_end)) = (
                at_hour(day, window.lunch_start_hour, &tz),
                at_hour(day, window.lunch_end_hour, &tz),
            )
        {
            let lunch = overlap_hours(period, (lunch_start, lunch_end));
            hours -= lunch;
            summary.lunch_deducted += lunch;
        }

        summary.working_hours += hours;
        summary.working_days += 1;
    }

    summary
}

/// Server-side handling of a request: parse, check, calculate, echo.
pub fn respond(req: &WorkingHoursRequest) -> Result<WorkingHoursResponse, RemoteError> {
    let start = parse_rfc3339(&req.start_time)
        .ok_or_else(|| RemoteError::bad_request("invalid startTime format: use ISO 8601"))?;
    let end = parse_rfc3339(&req.end_time)
        .ok_or_else(|| RemoteError::bad_request("invalid endTime format: use ISO 8601"))?;

    if start >= end {
        return Err(RemoteError::bad_request("endTime must be after startTime"));
    }

    let window = req.window();
    if !window.is_valid() {
        return Err(RemoteError::bad_request(
            "workStartHour must be before workEndHour, hours within 0-23",
        ));
    }

    let holidays: Vec<NaiveDate> = req
        .holidays
        .iter()
        .filter_map(|h| {
            let parsed = parse_date(h);
            if parsed.is_none() {
                tracing::warn!(holiday = %h, "ignoring malformed holiday date");
            }
            parsed
        })
        .collect();

    let summary = calculate(start, end, &window, &holidays);

    tracing::debug!(
        working_hours = summary.working_hours,
        working_days = summary.working_days,
        lunch_deducted = summary.lunch_deducted,
        "working hours calculated"
    );

    Ok(WorkingHoursResponse {
        start_time: req.start_time.clone(),
        end_time: req.end_time.clone(),
        working_hours: summary.working_hours,
        total_days: total_days(start, end),
        working_days: summary.working_days,
        lunch_deducted: summary.lunch_deducted,
    })
}
