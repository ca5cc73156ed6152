//! Request DTOs with validation.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rinkbook_entity::booking::RentalRequest;
use rinkbook_entity::equipment::{EquipmentKind, EquipmentStatus};
use rinkbook_entity::rink::RinkStatus;
use rinkbook_entity::slot::SlotType;

/// Create booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// The user making the booking.
    pub user_id: Uuid,
    /// The rink to book.
    pub rink_id: Uuid,
    /// Interval start.
    pub start_time: DateTime<Utc>,
    /// Interval end.
    pub end_time: DateTime<Utc>,
    /// Kind of ice time.
    pub slot_type: Option<SlotType>,
    /// Client-side price estimate; the server recomputes the total.
    pub total_price: Option<Decimal>,
    /// Free-form notes.
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    /// Equipment rentals.
    #[serde(default)]
    pub rentals: Vec<RentalRequest>,
}

/// Reschedule booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    /// New interval start.
    pub start_time: DateTime<Utc>,
    /// New interval end.
    pub end_time: DateTime<Utc>,
    /// New notes; omit to keep current.
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Create rink request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRinkRequest {
    /// Rink name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Street address.
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    /// Maximum number of skaters on the ice.
    #[validate(range(min = 1))]
    pub capacity: i32,
    /// Daily opening time.
    pub opening_time: NaiveTime,
    /// Daily closing time.
    pub closing_time: NaiveTime,
    /// Hourly rate in the platform currency.
    pub hourly_rate: Decimal,
}

/// Update rink request body. Omitted fields are unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRinkRequest {
    /// New name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// New street address.
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    /// New capacity.
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    /// New opening time.
    pub opening_time: Option<NaiveTime>,
    /// New closing time.
    pub closing_time: Option<NaiveTime>,
    /// New hourly rate.
    pub hourly_rate: Option<Decimal>,
    /// New status.
    pub status: Option<RinkStatus>,
}

/// Schedule query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// The date to generate slots for.
    pub date: NaiveDate,
    /// Slot granularity in minutes; defaults to the configured value.
    pub slot_minutes: Option<u32>,
    /// Kind of ice time; defaults to public skating.
    pub slot_type: Option<SlotType>,
}

/// Register equipment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEquipmentRequest {
    /// The rink that owns this equipment.
    pub rink_id: Uuid,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Kind of equipment.
    pub kind: EquipmentKind,
    /// Total units owned.
    pub quantity_total: i32,
}

/// Update equipment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEquipmentRequest {
    /// New display name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// New operational status.
    pub status: Option<EquipmentStatus>,
}

/// Register user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub display_name: String,
    /// Phone number.
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}
