//! Ice slot generation.
//!
//! Expands a rink's operating hours into discrete slots for one date and
//! marks each one against the rink's bookings. A pure function of its
//! inputs: re-running it for the same rink/date is idempotent, and slots
//! are never persisted, so there is no slots table to drift out of sync.
//!
//! Policy: when the closing time is not an exact multiple of the slot
//! duration from opening, the trailing remainder is dropped. Only whole
//! slots are offered.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_core::types::TimeRange;
use rinkbook_entity::booking::Booking;
use rinkbook_entity::slot::{IceSlot, SlotStatus, SlotType};

use crate::booking::conflict;

/// Slot generation parameters for one rink-date.
#[derive(Debug, Clone, Copy)]
pub struct SlotPlan {
    /// Daily opening time.
    pub opening_time: NaiveTime,
    /// Daily closing time.
    pub closing_time: NaiveTime,
    /// Slot granularity in minutes.
    pub slot_minutes: u32,
}

/// Generate the ordered slot sequence for `rink_id` on `date`.
///
/// `bookings` should hold every booking intersecting the date; which ones
/// block is decided here via the conflict checker, so callers do not need
/// to pre-filter by status.
pub fn generate(
    rink_id: Uuid,
    date: NaiveDate,
    plan: &SlotPlan,
    slot_type: SlotType,
    bookings: &[Booking],
) -> AppResult<Vec<IceSlot>> {
    if plan.slot_minutes == 0 {
        return Err(AppError::validation("Slot duration must be positive"));
    }
    if plan.opening_time >= plan.closing_time {
        return Err(AppError::validation(format!(
            "Opening time {} must be before closing time {}",
            plan.opening_time, plan.closing_time
        )));
    }

    let open = date.and_time(plan.opening_time).and_utc();
    let close = date.and_time(plan.closing_time).and_utc();
    let step = chrono::Duration::minutes(plan.slot_minutes as i64);

    let mut slots = Vec::new();
    let mut cursor = open;
    while cursor + step <= close {
        let range = TimeRange {
            start: cursor,
            end: cursor + step,
        };
        let status = if conflict::has_conflict(&range, bookings, None) {
            SlotStatus::Booked
        } else {
            SlotStatus::Available
        };
        slots.push(IceSlot {
            rink_id,
            start_time: range.start,
            end_time: range.end,
            slot_type,
            status,
        });
        cursor += step;
    }

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rinkbook_entity::booking::BookingStatus;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, min, 0).unwrap()
    }

    fn plan(open: (u32, u32), close: (u32, u32), minutes: u32) -> SlotPlan {
        SlotPlan {
            opening_time: time(open.0, open.1),
            closing_time: time(close.0, close.1),
            slot_minutes: minutes,
        }
    }

    fn booking(rink_id: Uuid, start: (u32, u32), end: (u32, u32), status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rink_id,
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

    #[test]
    fn test_eight_hour_day_yields_eight_slots() {
        let rink = Uuid::new_v4();
        let slots =
            generate(rink, date(), &plan((9, 0), (17, 0), 60), SlotType::Public, &[]).unwrap();

        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].start_time, at(9, 0));
        assert_eq!(slots[7].end_time, at(17, 0));
        assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
    }

    #[test]
    fn test_confirmed_booking_marks_exactly_one_slot() {
        let rink = Uuid::new_v4();
        let bookings = vec![booking(rink, (10, 0), (11, 0), BookingStatus::Confirmed)];
        let slots = generate(
            rink,
            date(),
            &plan((9, 0), (17, 0), 60),
            SlotType::Public,
            &bookings,
        )
        .unwrap();

        let booked: Vec<_> = slots
            .iter()
            .filter(|s| s.status == SlotStatus::Booked)
            .collect();
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0].start_time, at(10, 0));
    }

    #[test]
    fn test_cancelled_booking_leaves_slot_available() {
        let rink = Uuid::new_v4();
        let bookings = vec![booking(rink, (10, 0), (11, 0), BookingStatus::Cancelled)];
        let slots = generate(
            rink,
            date(),
            &plan((9, 0), (17, 0), 60),
            SlotType::Public,
            &bookings,
        )
        .unwrap();
        assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
    }

    #[test]
    fn test_booking_spanning_multiple_slots_marks_all_of_them() {
        let rink = Uuid::new_v4();
        let bookings = vec![booking(rink, (9, 30), (11, 30), BookingStatus::Pending)];
        let slots = generate(
            rink,
            date(),
            &plan((9, 0), (17, 0), 60),
            SlotType::Public,
            &bookings,
        )
        .unwrap();

        let booked: Vec<_> = slots
            .iter()
            .filter(|s| s.status == SlotStatus::Booked)
            .map(|s| s.start_time)
            .collect();
        assert_eq!(booked, vec![at(9, 0), at(10, 0), at(11, 0)]);
    }

    #[test]
    fn test_trailing_partial_slot_dropped() {
        let rink = Uuid::new_v4();
        let slots =
            generate(rink, date(), &plan((9, 0), (17, 30), 60), SlotType::Public, &[]).unwrap();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.last().unwrap().end_time, at(17, 0));
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let rink = Uuid::new_v4();
        let bookings = vec![booking(rink, (10, 0), (11, 0), BookingStatus::Confirmed)];
        let p = plan((9, 0), (17, 0), 30);
        let first = generate(rink, date(), &p, SlotType::Hockey, &bookings).unwrap();
        let second = generate(rink, date(), &p, SlotType::Hockey, &bookings).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.start_time, b.start_time);
            assert_eq!(a.status, b.status);
        }
    }

    #[test]
    fn test_invalid_plans_rejected() {
        let rink = Uuid::new_v4();
        assert!(generate(rink, date(), &plan((9, 0), (17, 0), 0), SlotType::Public, &[]).is_err());
        assert!(generate(rink, date(), &plan((17, 0), (9, 0), 60), SlotType::Public, &[]).is_err());
    }
}
