//! Half-open time intervals.
//!
//! All booking and slot intervals in Rinkbook are half-open: `[start, end)`.
//! Two intervals overlap iff `s1 < e2 && s2 < e1`; intervals that merely
//! touch at an endpoint (one booking ends exactly when the next begins) do
//! not overlap.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A half-open interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Exclusive end instant.
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a new range, rejecting empty or inverted intervals.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::validation(format!(
                "Start time {start} must be strictly before end time {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Standard half-open interval overlap test.
    ///
    /// An interval fully containing another counts as overlap; adjacent
    /// intervals do not.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Length of the interval in fractional hours, as an exact decimal.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.duration().num_seconds()) / Decimal::from(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, min, 0).unwrap()
    }

    fn range(s: (u32, u32), e: (u32, u32)) -> TimeRange {
        TimeRange::new(at(s.0, s.1), at(e.0, e.1)).unwrap()
    }

    #[test]
    fn test_rejects_inverted_and_empty() {
        assert!(TimeRange::new(at(10, 0), at(9, 0)).is_err());
        assert!(TimeRange::new(at(10, 0), at(10, 0)).is_err());
    }

    #[test]
    fn test_partial_overlap() {
        let a = range((10, 0), (11, 0));
        let b = range((10, 30), (11, 30));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_containment_is_overlap() {
        // Regression for the endpoint-containment bug: an interval fully
        // containing another must still count as overlapping.
        let outer = range((9, 0), (12, 0));
        let inner = range((10, 0), (11, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_adjacent_does_not_overlap() {
        let a = range((10, 0), (11, 0));
        let b = range((11, 0), (12, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_duration_hours_fractional() {
        let r = range((10, 0), (11, 30));
        assert_eq!(r.duration_hours(), Decimal::new(15, 1)); // 1.5
    }
}
