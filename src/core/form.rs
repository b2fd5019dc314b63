//! Form state of the working-hours calculator.
//!
//! The calculator owns what the user typed (dates, times, working window,
//! lunch flag, holidays), validates it into a `WorkingHoursRequest` and keeps
//! the last result or error. Each submission gets a generation number; only
//! the outcome of the latest submission is applied.

use crate::core::service::WorkingHoursService;
use crate::errors::{CalcError, RemoteError, ValidationError};
use crate::models::request::WorkingHoursRequest;
use crate::models::response::WorkingHoursResponse;
use crate::models::work_window::WorkWindow;
use crate::utils::date::{add_days, format_date, parse_date};
use crate::utils::time::parse_time;
use crate::utils::timezone::{TimezonePolicy, to_rfc3339};
use chrono::NaiveDate;

pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "17:00";

/// Ticket returned by `begin_calculation`, handed back on completion.
#[derive(Debug, Clone)]
pub struct PendingCalculation {
    generation: u64,
    pub request: WorkingHoursRequest,
}

impl PendingCalculation {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct WorkingHoursCalculator {
    start_date: String,
    start_time: String,
    end_date: String,
    end_time: String,
    window: WorkWindow,
    holidays: Vec<String>,
    timezone: TimezonePolicy,
    show_advanced_options: bool,

    result: Option<WorkingHoursResponse>,
    error_message: Option<String>,
    is_calculating: bool,
    generation: u64,
}

impl WorkingHoursCalculator {
    /// Today to tomorrow, 09:00 to 17:00, in the given zone.
    pub fn new(timezone: TimezonePolicy, window: WorkWindow) -> Self {
        Self::starting_on(timezone.today(), timezone, window)
    }

    pub fn starting_on(today: NaiveDate, timezone: TimezonePolicy, window: WorkWindow) -> Self {
        let tomorrow = add_days(today, 1).unwrap_or(today);

        Self {
            start_date: format_date(today),
            start_time: DEFAULT_START_TIME.to_string(),
            end_date: format_date(tomorrow),
            end_time: DEFAULT_END_TIME.to_string(),
            window,
            holidays: Vec::new(),
            timezone,
            show_advanced_options: false,
            result: None,
            error_message: None,
            is_calculating: false,
            generation: 0,
        }
    }

    // ---------------------------
    // Accessors
    // ---------------------------
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn window(&self) -> &WorkWindow {
        &self.window
    }

    pub fn holidays(&self) -> &[String] {
        &self.holidays
    }

    pub fn timezone(&self) -> TimezonePolicy {
        self.timezone
    }

    pub fn show_advanced_options(&self) -> bool {
        self.show_advanced_options
    }

    pub fn result(&self) -> Option<&WorkingHoursResponse> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_calculating(&self) -> bool {
        self.is_calculating
    }

    // ---------------------------
    // Setters
    // ---------------------------
    pub fn set_start(&mut self, date: impl Into<String>, time: impl Into<String>) {
        self.start_date = date.into();
        self.start_time = time.into();
    }

    pub fn set_end(&mut self, date: impl Into<String>, time: impl Into<String>) {
        self.end_date = date.into();
        self.end_time = time.into();
    }

    pub fn set_work_hours(&mut self, start_hour: u32, end_hour: u32) {
        self.window.work_start_hour = start_hour;
        self.window.work_end_hour = end_hour;
    }

    pub fn set_lunch_hours(&mut self, start_hour: u32, end_hour: u32) {
        self.window.lunch_start_hour = start_hour;
        self.window.lunch_end_hour = end_hour;
    }

    pub fn set_deduct_lunch(&mut self, deduct: bool) {
        self.window.deduct_lunch = deduct;
    }

    pub fn set_holidays(&mut self, holidays: Vec<String>) {
        self.holidays = holidays;
    }

    pub fn toggle_advanced_options(&mut self) {
        self.show_advanced_options = !self.show_advanced_options;
    }

    /// Today 09:00 to today + `days` 17:00. No validation, no service call.
    pub fn set_quick_range(&mut self, days: i64) {
        self.set_quick_range_from(self.timezone.today(), days);
    }

    pub fn set_quick_range_from(&mut self, today: NaiveDate, days: i64) {
        let Some(end) = add_days(today, days) else {
            tracing::warn!(days, "quick range out of calendar bounds, ignored");
            return;
        };

        self.start_date = format_date(today);
        self.start_time = DEFAULT_START_TIME.to_string();
        self.end_date = format_date(end);
        self.end_time = DEFAULT_END_TIME.to_string();
    }

    /// Work 9-17, lunch 12-13, no lunch deduction.
    pub fn reset_to_defaults(&mut self) {
        self.window = WorkWindow::default();
    }

    // ---------------------------
    // Calculation
    // ---------------------------

    /// Validate the form and build the request that would be sent.
    pub fn build_request(&self) -> Result<WorkingHoursRequest, ValidationError> {
        let fields = [
            &self.start_date,
            &self.start_time,
            &self.end_date,
            &self.end_time,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        let start = self.combine(&self.start_date, &self.start_time)?;
        let end = self.combine(&self.end_date, &self.end_time)?;

        if end <= start {
            return Err(ValidationError::EndBeforeStart);
        }

        if !self.window.is_valid() {
            return Err(ValidationError::InvalidWorkWindow);
        }

        Ok(WorkingHoursRequest::new(
            to_rfc3339(&start),
            to_rfc3339(&end),
            self.window,
            self.holidays.clone(),
        ))
    }

    fn combine(
        &self,
        date: &str,
        time: &str,
    ) -> Result<chrono::DateTime<chrono::FixedOffset>, ValidationError> {
        let d = parse_date(date).ok_or_else(|| ValidationError::InvalidDateTime(date.to_string()))?;
        let t = parse_time(time).ok_or_else(|| ValidationError::InvalidDateTime(time.to_string()))?;

        self.timezone
            .resolve(d.and_time(t))
            .ok_or_else(|| ValidationError::InvalidDateTime(format!("{} {}", date, time)))
    }

    /// Clear the previous outcome, validate, and open a new generation.
    /// Validation failures are recorded in `error_message` and returned.
    pub fn begin_calculation(&mut self) -> Result<PendingCalculation, ValidationError> {
        self.error_message = None;
        self.result = None;

        let request = match self.build_request() {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "calculation rejected before submission");
                self.error_message = Some(e.to_string());
                return Err(e);
            }
        };

        self.generation += 1;
        self.is_calculating = true;

        tracing::debug!(
            generation = self.generation,
            start = %request.start_time,
            end = %request.end_time,
            "calculation submitted"
        );

        Ok(PendingCalculation {
            generation: self.generation,
            request,
        })
    }

    /// Apply an outcome. Returns `false` (and changes nothing) when a newer
    /// calculation has been submitted since `pending` was issued.
    pub fn complete_calculation(
        &mut self,
        pending: PendingCalculation,
        outcome: Result<WorkingHoursResponse, RemoteError>,
    ) -> bool {
        if pending.generation != self.generation {
            tracing::debug!(
                stale = pending.generation,
                current = self.generation,
                "dropping stale calculation outcome"
            );
            return false;
        }

        self.is_calculating = false;

        match outcome {
            Ok(resp) => {
                self.result = Some(resp);
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!(status = ?e.status, error = %e.message, "calculation failed");
                self.result = None;
                self.error_message = Some(CalcError::Remote(e).display_message());
            }
        }

        true
    }

    /// Validate, send to `service`, store the outcome.
    pub async fn calculate_working_hours(
        &mut self,
        service: &dyn WorkingHoursService,
    ) -> Result<WorkingHoursResponse, CalcError> {
        let pending = self.begin_calculation()?;
        let outcome = service.calculate(&pending.request).await;
        let returned = outcome.clone();

        self.complete_calculation(pending, outcome);

        returned.map_err(CalcError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::LocalService;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records requests and replies with a canned outcome.
    struct FakeService {
        reply: Result<WorkingHoursResponse, RemoteError>,
        calls: Mutex<Vec<WorkingHoursRequest>>,
    }

    impl FakeService {
        fn replying(reply: Result<WorkingHoursResponse, RemoteError>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl WorkingHoursService for FakeService {
        async fn calculate(
            &self,
            req: &WorkingHoursRequest,
        ) -> Result<WorkingHoursResponse, RemoteError> {
            self.calls.lock().unwrap().push(req.clone());
            self.reply.clone()
        }
    }

    fn response(hours: f64) -> WorkingHoursResponse {
        WorkingHoursResponse {
            start_time: "2024-01-01T09:00:00Z".into(),
            end_time: "2024-01-02T17:00:00Z".into(),
            working_hours: hours,
            total_days: 2,
            working_days: 2,
            lunch_deducted: 0.0,
        }
    }

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn calculator() -> WorkingHoursCalculator {
        let mut c = WorkingHoursCalculator::starting_on(
            day("2024-01-01"),
            TimezonePolicy::Utc,
            WorkWindow::default(),
        );
        c.set_start("2024-01-01", "09:00");
        c.set_end("2024-01-02", "17:00");
        c
    }

    #[test]
    fn starts_today_to_tomorrow_nine_to_five() {
        let c = WorkingHoursCalculator::starting_on(
            day("2024-02-28"),
            TimezonePolicy::Utc,
            WorkWindow::default(),
        );
        assert_eq!(c.start_date(), "2024-02-28");
        assert_eq!(c.end_date(), "2024-02-29");
        assert_eq!(c.start_time(), "09:00");
        assert_eq!(c.end_time(), "17:00");
        assert!(!c.is_calculating());
        assert!(c.result().is_none());
    }

    #[test]
    fn request_combines_date_and_time_into_timestamps() {
        let req = calculator().build_request().unwrap();
        assert_eq!(req.start_time, "2024-01-01T09:00:00Z");
        assert_eq!(req.end_time, "2024-01-02T17:00:00Z");
        assert_eq!(req.work_start_hour, 9);
        assert!(!req.deduct_lunch);
    }

    #[test]
    fn fixed_offset_zone_is_serialized_explicitly() {
        let mut c = calculator();
        c.timezone = "+01:00".parse().unwrap();
        let req = c.build_request().unwrap();
        assert_eq!(req.start_time, "2024-01-01T09:00:00+01:00");
    }

    #[tokio::test]
    async fn missing_field_fails_without_service_call() {
        let service = FakeService::replying(Ok(response(8.0)));

        for blank in 0..4 {
            let mut c = calculator();
            match blank {
                0 => c.set_start("", "09:00"),
                1 => c.set_start("2024-01-01", " "),
                2 => c.set_end("", "17:00"),
                _ => c.set_end("2024-01-02", ""),
            }

            let err = c.calculate_working_hours(&service).await.unwrap_err();
            assert_eq!(err, CalcError::Validation(ValidationError::MissingFields));
            assert_eq!(
                c.error_message(),
                Some("Please fill in all date and time fields")
            );
            assert!(!c.is_calculating());
        }

        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn end_not_after_start_fails_without_service_call() {
        let service = FakeService::replying(Ok(response(8.0)));
        let ends = [("2024-01-01", "09:00"), ("2024-01-01", "08:59"), ("2023-12-31", "17:00")];

        for (date, time) in ends {
            let mut c = calculator();
            c.set_end(date, time);

            let err = c.calculate_working_hours(&service).await.unwrap_err();
            assert_eq!(err, CalcError::Validation(ValidationError::EndBeforeStart));
            assert!(c.result().is_none());
        }

        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn malformed_input_and_bad_window_are_rejected_locally() {
        let service = FakeService::replying(Ok(response(8.0)));

        let mut c = calculator();
        c.set_start("2024-02-30", "09:00");
        assert!(matches!(
            c.calculate_working_hours(&service).await,
            Err(CalcError::Validation(ValidationError::InvalidDateTime(_)))
        ));

        let mut c = calculator();
        c.set_work_hours(17, 9);
        assert_eq!(
            c.calculate_working_hours(&service).await.unwrap_err(),
            CalcError::Validation(ValidationError::InvalidWorkWindow)
        );

        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn success_stores_server_value_unchanged() {
        let service = FakeService::replying(Ok(response(13.37)));
        let mut c = calculator();

        let resp = c.calculate_working_hours(&service).await.unwrap();

        assert_eq!(resp.working_hours, 13.37);
        assert_eq!(c.result().unwrap().working_hours, 13.37);
        assert!(c.error_message().is_none());
        assert!(!c.is_calculating());
        assert_eq!(service.call_count(), 1);

        let sent = &service.calls.lock().unwrap()[0];
        assert_eq!(sent.start_time, "2024-01-01T09:00:00Z");
    }

    #[tokio::test]
    async fn failure_clears_previous_result_and_shows_message() {
        let mut c = calculator();
        c.calculate_working_hours(&FakeService::replying(Ok(response(8.0))))
            .await
            .unwrap();
        assert!(c.result().is_some());

        let failing = FakeService::replying(Err(RemoteError::new(Some(500), "backend down")));
        let err = c.calculate_working_hours(&failing).await.unwrap_err();

        assert!(matches!(err, CalcError::Remote(_)));
        assert!(c.result().is_none());
        assert_eq!(c.error_message(), Some("backend down"));
        assert!(!c.is_calculating());
    }

    #[tokio::test]
    async fn failure_without_message_uses_generic_text() {
        let mut c = calculator();
        let failing = FakeService::replying(Err(RemoteError::transport("")));
        c.calculate_working_hours(&failing).await.unwrap_err();

        assert_eq!(
            c.error_message(),
            Some("An error occurred while calculating working hours")
        );
    }

    #[test]
    fn latest_submission_wins() {
        let mut c = calculator();

        let first = c.begin_calculation().unwrap();
        c.set_end("2024-01-03", "17:00");
        let second = c.begin_calculation().unwrap();
        assert!(second.generation() > first.generation());
        assert!(c.is_calculating());

        assert!(c.complete_calculation(second, Ok(response(16.0))));
        assert!(!c.complete_calculation(first, Ok(response(8.0))));

        assert_eq!(c.result().unwrap().working_hours, 16.0);
        assert!(!c.is_calculating());
    }

    #[test]
    fn stale_error_does_not_clobber_newer_pending_state() {
        let mut c = calculator();

        let first = c.begin_calculation().unwrap();
        let _second = c.begin_calculation().unwrap();

        assert!(!c.complete_calculation(first, Err(RemoteError::transport("timeout"))));
        assert!(c.error_message().is_none());
        assert!(c.is_calculating());
    }

    #[test]
    fn quick_range_sets_dates_and_default_times() {
        let mut c = calculator();
        c.set_start("2020-01-01", "11:11");
        c.set_end("2020-01-02", "12:12");

        c.set_quick_range_from(day("2024-12-29"), 5);

        assert_eq!(c.start_date(), "2024-12-29");
        assert_eq!(c.start_time(), "09:00");
        assert_eq!(c.end_date(), "2025-01-03");
        assert_eq!(c.end_time(), "17:00");
        assert!(c.result().is_none());
    }

    #[test]
    fn quick_range_counts_from_current_date() {
        let mut c = calculator();
        let today = TimezonePolicy::Utc.today();

        c.set_quick_range(5);

        assert_eq!(c.start_date(), format_date(today));
        assert_eq!(c.end_date(), format_date(add_days(today, 5).unwrap()));
        assert_eq!(c.start_time(), "09:00");
        assert_eq!(c.end_time(), "17:00");
    }

    #[test]
    fn reset_restores_default_window() {
        let mut c = calculator();
        c.set_work_hours(7, 19);
        c.set_lunch_hours(13, 14);
        c.set_deduct_lunch(true);

        c.reset_to_defaults();

        let w = c.window();
        assert_eq!(
            (
                w.work_start_hour,
                w.work_end_hour,
                w.lunch_start_hour,
                w.lunch_end_hour,
                w.deduct_lunch
            ),
            (9, 17, 12, 13, false)
        );
    }

    #[test]
    fn advanced_options_toggle() {
        let mut c = calculator();
        assert!(!c.show_advanced_options());
        c.toggle_advanced_options();
        assert!(c.show_advanced_options());
        c.toggle_advanced_options();
        assert!(!c.show_advanced_options());
    }

    #[tokio::test]
    async fn local_service_computes_reference_week() {
        let mut c = WorkingHoursCalculator::starting_on(
            day("2025-10-27"),
            TimezonePolicy::Utc,
            WorkWindow::default(),
        );
        c.set_quick_range_from(day("2025-10-27"), 4);
        c.set_deduct_lunch(true);
        c.set_holidays(vec!["2025-10-29".into()]);

        let resp = c.calculate_working_hours(&LocalService).await.unwrap();

        assert_eq!(resp.working_hours, 28.0);
        assert_eq!(resp.total_days, 5);
        assert_eq!(resp.working_days, 4);
        assert_eq!(resp.lunch_deducted, 4.0);
    }
}
