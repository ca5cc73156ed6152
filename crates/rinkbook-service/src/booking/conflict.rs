//! Interval conflict checking.
//!
//! Pure functions: given the candidate interval and the bookings already on
//! the rink, decide whether any active one overlaps. Raising the `Conflict`
//! error is the caller's responsibility. Uses the standard half-open overlap
//! test, so an interval fully containing an existing booking conflicts.

use uuid::Uuid;

use rinkbook_core::types::TimeRange;
use rinkbook_entity::booking::Booking;

/// Bookings from `existing` that block the candidate interval.
///
/// Only `pending` and `confirmed` bookings block; `exclude` skips one
/// booking id so an update does not conflict with itself.
pub fn find_conflicts<'a>(
    range: &TimeRange,
    existing: &'a [Booking],
    exclude: Option<Uuid>,
) -> Vec<&'a Booking> {
    existing
        .iter()
        .filter(|b| Some(b.id) != exclude)
        .filter(|b| b.status.blocks_slot())
        .filter(|b| range.overlaps(&b.time_range()))
        .collect()
}

/// Whether any active booking blocks the candidate interval.
pub fn has_conflict(range: &TimeRange, existing: &[Booking], exclude: Option<Uuid>) -> bool {
    !find_conflicts(range, existing, exclude).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rinkbook_entity::booking::BookingStatus;
    use rinkbook_entity::slot::SlotType;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, min, 0).unwrap()
    }

    fn booking(start: (u32, u32), end: (u32, u32), status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rink_id: Uuid::new_v4(),
            start_time: at(start.0, start.1),
            end_time: at(end.0, end.1),
            slot_type: SlotType::Public,
            status,
            total_price: Decimal::new(5000, 2),
            notes: None,
            created_at: at(0, 0),
            updated_at: at(0, 0),
        }
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> TimeRange {
        TimeRange::new(at(start.0, start.1), at(end.0, end.1)).unwrap()
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        let existing = vec![booking((10, 0), (11, 0), BookingStatus::Confirmed)];
        assert!(has_conflict(&range((10, 30), (11, 30)), &existing, None));
    }

    #[test]
    fn test_containing_interval_conflicts() {
        // The candidate fully contains the existing booking. The source
        // system's endpoint-containment check missed this case.
        let existing = vec![booking((10, 0), (11, 0), BookingStatus::Confirmed)];
        assert!(has_conflict(&range((9, 0), (12, 0)), &existing, None));
    }

    #[test]
    fn test_contained_interval_conflicts() {
        let existing = vec![booking((9, 0), (12, 0), BookingStatus::Pending)];
        assert!(has_conflict(&range((10, 0), (11, 0)), &existing, None));
    }

    #[test]
    fn test_adjacent_does_not_conflict() {
        let existing = vec![booking((10, 0), (11, 0), BookingStatus::Confirmed)];
        assert!(!has_conflict(&range((11, 0), (12, 0)), &existing, None));
        assert!(!has_conflict(&range((9, 0), (10, 0)), &existing, None));
    }

    #[test]
    fn test_cancelled_and_completed_do_not_block() {
        let existing = vec![
            booking((10, 0), (11, 0), BookingStatus::Cancelled),
            booking((10, 0), (11, 0), BookingStatus::Completed),
        ];
        assert!(!has_conflict(&range((10, 0), (11, 0)), &existing, None));
    }

    #[test]
    fn test_exclude_skips_self() {
        let existing = vec![booking((10, 0), (11, 0), BookingStatus::Confirmed)];
        let own_id = existing[0].id;
        assert!(!has_conflict(&range((10, 0), (11, 0)), &existing, Some(own_id)));
        assert!(has_conflict(&range((10, 0), (11, 0)), &existing, Some(Uuid::new_v4())));
    }

    #[test]
    fn test_find_conflicts_returns_offenders() {
        let existing = vec![
            booking((9, 0), (10, 0), BookingStatus::Confirmed),
            booking((10, 0), (11, 0), BookingStatus::Confirmed),
            booking((11, 0), (12, 0), BookingStatus::Confirmed),
        ];
        let hits = find_conflicts(&range((9, 30), (10, 30)), &existing, None);
        assert_eq!(hits.len(), 2);
    }
}
