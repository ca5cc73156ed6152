//! Booking entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use rinkbook_core::types::TimeRange;

use crate::slot::SlotType;

use super::status::BookingStatus;

/// A reservation of a rink for a half-open time interval.
///
/// Bookings are owned by the system once created; status changes go through
/// the conflict-check and cancellation-policy gates, never directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The user who made the booking.
    pub user_id: Uuid,
    /// The rink being booked.
    pub rink_id: Uuid,
    /// Start of the booked interval (inclusive).
    pub start_time: DateTime<Utc>,
    /// End of the booked interval (exclusive).
    pub end_time: DateTime<Utc>,
    /// Kind of ice time reserved.
    pub slot_type: SlotType,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Total price, rounded to 2 decimal places.
    pub total_price: Decimal,
    /// Free-form notes from the user.
    pub notes: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The booked interval as a [`TimeRange`].
    ///
    /// `start_time < end_time` is a database constraint, so this never
    /// constructs an inverted range.
    pub fn time_range(&self) -> TimeRange {
        TimeRange {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// Data required to insert a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    /// The user making the booking.
    pub user_id: Uuid,
    /// The rink being booked.
    pub rink_id: Uuid,
    /// Start of the interval.
    pub start_time: DateTime<Utc>,
    /// End of the interval.
    pub end_time: DateTime<Utc>,
    /// Kind of ice time reserved.
    pub slot_type: SlotType,
    /// Server-computed total price.
    pub total_price: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// An equipment line item requested alongside a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalRequest {
    /// The equipment to rent.
    pub equipment_id: Uuid,
    /// How many units.
    pub quantity: i32,
}
