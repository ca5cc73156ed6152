//! Booking cancellation policy.
//!
//! A booking may be cancelled only while it is `pending` or `confirmed`,
//! and only while the current time is more than the configured cutoff
//! before the booking's start. Cancellation is a status transition; the
//! record is kept for audit/history.

use chrono::{DateTime, Duration, Utc};

use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_entity::booking::{Booking, BookingStatus};

/// Enforces the cancellation window and status preconditions.
#[derive(Debug, Clone, Copy)]
pub struct CancellationPolicy {
    /// Minimum lead time before start during which cancellation is refused.
    cutoff: Duration,
}

impl CancellationPolicy {
    /// Create a policy with the given cutoff in hours.
    pub fn new(cutoff_hours: i64) -> Self {
        Self {
            cutoff: Duration::hours(cutoff_hours),
        }
    }

    /// Check whether `booking` may be cancelled at instant `now`.
    ///
    /// `now` is a parameter rather than read from the clock so the policy
    /// stays a pure function.
    pub fn check(&self, booking: &Booking, now: DateTime<Utc>) -> AppResult<()> {
        match booking.status {
            BookingStatus::Cancelled => {
                return Err(AppError::already_cancelled(format!(
                    "Booking {} is already cancelled",
                    booking.id
                )));
            }
            BookingStatus::Completed => {
                return Err(AppError::invalid_transition(format!(
                    "Booking {} is completed and cannot be cancelled",
                    booking.id
                )));
            }
            BookingStatus::Pending | BookingStatus::Confirmed => {}
        }

        if now + self.cutoff >= booking.start_time {
            return Err(AppError::cancellation_window(format!(
                "Booking {} starts at {}; cancellations close {} hours before start",
                booking.id,
                booking.start_time,
                self.cutoff.num_hours()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use rinkbook_entity::slot::SlotType;
    use uuid::Uuid;

    fn booking_starting_at(start: DateTime<Utc>, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rink_id: Uuid::new_v4(),
            start_time: start,
            end_time: start + Duration::hours(1),
            slot_type: SlotType::Public,
            status,
            total_price: Decimal::new(5000, 2),
            notes: None,
            created_at: start - Duration::days(7),
            updated_at: start - Duration::days(7),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cancel_outside_window_allowed() {
        let policy = CancellationPolicy::new(24);
        let b = booking_starting_at(now() + Duration::hours(48), BookingStatus::Confirmed);
        assert!(policy.check(&b, now()).is_ok());
    }

    #[test]
    fn test_cancel_inside_window_refused() {
        let policy = CancellationPolicy::new(24);
        let b = booking_starting_at(now() + Duration::hours(12), BookingStatus::Confirmed);
        let err = policy.check(&b, now()).unwrap_err();
        assert_eq!(err.kind, rinkbook_core::error::ErrorKind::CancellationWindow);
    }

    #[test]
    fn test_cancel_exactly_at_cutoff_refused() {
        let policy = CancellationPolicy::new(24);
        let b = booking_starting_at(now() + Duration::hours(24), BookingStatus::Pending);
        assert!(policy.check(&b, now()).is_err());
    }

    #[test]
    fn test_already_cancelled() {
        let policy = CancellationPolicy::new(24);
        let b = booking_starting_at(now() + Duration::hours(48), BookingStatus::Cancelled);
        let err = policy.check(&b, now()).unwrap_err();
        assert_eq!(err.kind, rinkbook_core::error::ErrorKind::AlreadyCancelled);
    }

    #[test]
    fn test_completed_cannot_be_cancelled() {
        let policy = CancellationPolicy::new(24);
        let b = booking_starting_at(now() + Duration::hours(48), BookingStatus::Completed);
        let err = policy.check(&b, now()).unwrap_err();
        assert_eq!(err.kind, rinkbook_core::error::ErrorKind::InvalidTransition);
    }

    #[test]
    fn test_configurable_cutoff() {
        let policy = CancellationPolicy::new(2);
        let b = booking_starting_at(now() + Duration::hours(12), BookingStatus::Confirmed);
        assert!(policy.check(&b, now()).is_ok());
    }
}
