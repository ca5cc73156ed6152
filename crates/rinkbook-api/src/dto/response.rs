//! Response DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rinkbook_entity::booking::Booking;
use rinkbook_entity::equipment::EquipmentRental;
use rinkbook_entity::slot::IceSlot;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A booking together with its equipment rentals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// The booking record.
    #[serde(flatten)]
    pub booking: Booking,
    /// Equipment rented with this booking.
    pub rentals: Vec<EquipmentRental>,
}

/// A rink's derived schedule for one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The rink.
    pub rink_id: Uuid,
    /// The date the schedule covers.
    pub date: NaiveDate,
    /// Ordered slot sequence.
    pub slots: Vec<IceSlot>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
