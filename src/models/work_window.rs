use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_START_HOUR: u32 = 9;
pub const DEFAULT_WORK_END_HOUR: u32 = 17;
pub const DEFAULT_LUNCH_START_HOUR: u32 = 12;
pub const DEFAULT_LUNCH_END_HOUR: u32 = 13;

/// Daily working window plus the optional lunch interval deducted from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub work_start_hour: u32,
    pub work_end_hour: u32,
    pub lunch_start_hour: u32,
    pub lunch_end_hour: u32,
    pub deduct_lunch: bool,
}

impl Default for WorkWindow {
    fn default() -> Self {
        Self {
            work_start_hour: DEFAULT_WORK_START_HOUR,
            work_end_hour: DEFAULT_WORK_END_HOUR,
            lunch_start_hour: DEFAULT_LUNCH_START_HOUR,
            lunch_end_hour: DEFAULT_LUNCH_END_HOUR,
            deduct_lunch: false,
        }
    }
}

impl WorkWindow {
    /// Work hours must lie in 0..=23 with start < end.
    /// Lunch hours only need to be valid hours: an empty lunch interval deducts nothing.
    pub fn is_valid(&self) -> bool {
        self.work_start_hour <= 23
            && self.work_end_hour <= 23
            && self.work_start_hour < self.work_end_hour
            && self.lunch_start_hour <= 23
            && self.lunch_end_hour <= 23
    }

    pub fn work_hours_per_day(&self) -> u32 {
        self.work_end_hour.saturating_sub(self.work_start_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_nine_to_five_without_lunch() {
        let w = WorkWindow::default();
        assert_eq!(w.work_start_hour, 9);
        assert_eq!(w.work_end_hour, 17);
        assert_eq!(w.lunch_start_hour, 12);
        assert_eq!(w.lunch_end_hour, 13);
        assert!(!w.deduct_lunch);
        assert!(w.is_valid());
        assert_eq!(w.work_hours_per_day(), 8);
    }

    #[test]
    fn inverted_or_out_of_range_windows_are_rejected() {
        let inverted = WorkWindow {
            work_start_hour: 17,
            work_end_hour: 9,
            ..WorkWindow::default()
        };
        assert!(!inverted.is_valid());

        let out_of_range = WorkWindow {
            work_end_hour: 24,
            ..WorkWindow::default()
        };
        assert!(!out_of_range.is_valid());
    }
}
