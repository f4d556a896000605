//! Calendar ranges normalized to noon

use crate::error::{BackfillError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Hour every range boundary and commit timestamp is pinned to
pub const NOON_HOUR: u32 = 12;

/// Half-open range of calendar days `[start, end)`, both ends at noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    /// Build a range from two calendar days, rejecting `end <= start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(BackfillError::InvalidRange { start, end });
        }

        Ok(DateRange {
            start: at_noon(start),
            end: at_noon(end),
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Number of whole days in the range (always at least 1)
    pub fn total_days(&self) -> u32 {
        (self.end - self.start).num_days() as u32
    }
}

/// Pin a calendar day to noon
pub fn at_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(NOON_HOUR, 0, 0).unwrap_or(NaiveTime::MIN))
}

/// Restartable producer of successive days: `start`, `start + 1`, ...
pub fn dates_from(start: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
    std::iter::successors(Some(start), |current| {
        current.checked_add_signed(Duration::days(1))
    })
}

/// Parse a calendar day as `YYYY-MM-DD` or `YYYY MM DD`
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BackfillError::InvalidInput("date is empty".to_string()));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            NaiveDate::parse_from_str(&parts.join("-"), "%Y-%m-%d")
        })
        .map_err(|_| BackfillError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_normalized_to_noon() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 8)).unwrap();
        assert_eq!(range.start().to_string(), "2024-01-01 12:00:00");
        assert_eq!(range.end().to_string(), "2024-01-08 12:00:00");
        assert_eq!(range.total_days(), 7);
    }

    #[test]
    fn test_equal_dates_rejected() {
        let err = DateRange::new(day(2024, 1, 1), day(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, BackfillError::InvalidRange { .. }));
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let err = DateRange::new(day(2024, 2, 1), day(2024, 1, 1)).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_total_days_across_leap_day() {
        let range = DateRange::new(day(2024, 2, 28), day(2024, 3, 1)).unwrap();
        assert_eq!(range.total_days(), 2);
    }

    #[test]
    fn test_range_is_half_open() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 8)).unwrap();
        assert_eq!(range.start(), at_noon(day(2024, 1, 1)));
        assert_eq!(range.end(), at_noon(day(2024, 1, 8)));
        assert_eq!(range.total_days(), 7);
    }

    #[test]
    fn test_dates_from_advances_one_day() {
        let dates: Vec<_> = dates_from(at_noon(day(2024, 12, 30))).take(3).collect();
        assert_eq!(dates[0], at_noon(day(2024, 12, 30)));
        assert_eq!(dates[1], at_noon(day(2024, 12, 31)));
        assert_eq!(dates[2], at_noon(day(2025, 1, 1)));
    }

    #[test]
    fn test_dates_from_is_restartable() {
        let start = at_noon(day(2024, 1, 1));
        let first: Vec<_> = dates_from(start).take(5).collect();
        let second: Vec<_> = dates_from(start).take(5).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_day_formats() {
        assert_eq!(parse_day("2024-01-17").unwrap(), day(2024, 1, 17));
        assert_eq!(parse_day("2024 1 17").unwrap(), day(2024, 1, 17));
        assert_eq!(parse_day("  2024-01-17\n").unwrap(), day(2024, 1, 17));
    }

    #[test]
    fn test_parse_day_invalid() {
        assert!(matches!(
            parse_day("2024-02-30").unwrap_err(),
            BackfillError::InvalidDate(_)
        ));
        assert!(matches!(
            parse_day("yesterday").unwrap_err(),
            BackfillError::InvalidDate(_)
        ));
        assert!(matches!(
            parse_day("").unwrap_err(),
            BackfillError::InvalidInput(_)
        ));
    }
}
