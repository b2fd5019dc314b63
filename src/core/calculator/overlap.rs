use chrono::{DateTime, FixedOffset};

pub type Span = (DateTime<FixedOffset>, DateTime<FixedOffset>);

/// Intersection of two spans, `None` when it is empty.
pub fn intersect(a: Span, b: Span) -> Option<Span> {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);

    if start < end { Some((start, end)) } else { None }
}

pub fn hours_between(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Length in hours of the overlap between two spans (0 when disjoint).
pub fn overlap_hours(a: Span, b: Span) -> f64 {
    intersect(a, b)
        .map(|(s, e)| hours_between(s, e))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn overlapping_spans_intersect() {
        let a = (t("2025-10-27T08:00:00Z"), t("2025-10-27T10:00:00Z"));
        let b = (t("2025-10-27T09:00:00Z"), t("2025-10-27T17:00:00Z"));

        let (s, e) = intersect(a, b).unwrap();
        assert_eq!(s, t("2025-10-27T09:00:00Z"));
        assert_eq!(e, t("2025-10-27T10:00:00Z"));
        assert_eq!(overlap_hours(a, b), 1.0);
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        let a = (t("2025-10-27T09:00:00Z"), t("2025-10-27T12:00:00Z"));
        let b = (t("2025-10-27T12:00:00Z"), t("2025-10-27T13:00:00Z"));
        assert!(intersect(a, b).is_none());
        assert_eq!(overlap_hours(a, b), 0.0);
    }

    #[test]
    fn offsets_are_compared_as_instants() {
        let a = (t("2025-10-27T09:00:00+02:00"), t("2025-10-27T11:00:00+02:00"));
        let b = (t("2025-10-27T08:00:00Z"), t("2025-10-27T12:00:00Z"));
        assert_eq!(overlap_hours(a, b), 1.0);
    }
}
