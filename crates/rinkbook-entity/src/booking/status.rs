//! Booking status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a booking.
///
/// Transitions are one-directional: `pending -> confirmed -> completed`,
/// and `pending|confirmed -> cancelled`. Everything else is rejected.
/// Cancellation never deletes the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created but not yet confirmed.
    Pending,
    /// Confirmed and holding its slot.
    Confirmed,
    /// Cancelled before start; kept for audit/history.
    Cancelled,
    /// The booked interval has passed.
    Completed,
}

impl BookingStatus {
    /// All statuses, in declaration order.
    pub const ALL: [BookingStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    /// Whether a booking in this status blocks its interval from others.
    pub fn blocks_slot(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Statuses permitted to transition into `next`.
    ///
    /// Used as the status guard on persisted transition writes, so a write
    /// that lost a race against another transition matches zero rows rather
    /// than overwriting it.
    pub fn sources_of(next: BookingStatus) -> Vec<BookingStatus> {
        Self::ALL
            .into_iter()
            .filter(|s| s.can_transition_to(next))
            .collect()
    }

    /// Whether the transition `self -> next` is permitted.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::Completed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = rinkbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(rinkbook_core::AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: pending, confirmed, cancelled, completed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
    }

    #[test]
    fn test_terminal_statuses_have_no_exits() {
        for next in BookingStatus::ALL {
            assert!(!BookingStatus::Cancelled.can_transition_to(next));
            assert!(!BookingStatus::Completed.can_transition_to(next));
        }
    }

    #[test]
    fn test_sources_follow_transition_matrix() {
        assert_eq!(
            BookingStatus::sources_of(BookingStatus::Confirmed),
            vec![BookingStatus::Pending]
        );
        assert_eq!(
            BookingStatus::sources_of(BookingStatus::Completed),
            vec![BookingStatus::Confirmed]
        );
        assert_eq!(
            BookingStatus::sources_of(BookingStatus::Cancelled),
            vec![BookingStatus::Pending, BookingStatus::Confirmed]
        );
        // Nothing transitions back into pending, so a guarded write to
        // pending can never match a row.
        assert!(BookingStatus::sources_of(BookingStatus::Pending).is_empty());
    }

    #[test]
    fn test_no_backward_transitions() {
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    }

    #[test]
    fn test_only_active_statuses_block() {
        assert!(BookingStatus::Pending.blocks_slot());
        assert!(BookingStatus::Confirmed.blocks_slot());
        assert!(!BookingStatus::Cancelled.blocks_slot());
        assert!(!BookingStatus::Completed.blocks_slot());
    }
}
