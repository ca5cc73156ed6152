//! Rink entity model.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RinkStatus;

/// An ice rink available for booking.
///
/// Operating hours and the hourly rate live on the rink record; derived ice
/// slots are generated from them on demand and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rink {
    /// Unique rink identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Maximum number of skaters on the ice.
    pub capacity: i32,
    /// Daily opening time (local, stored naive).
    pub opening_time: NaiveTime,
    /// Daily closing time (local, stored naive).
    pub closing_time: NaiveTime,
    /// Hourly price charged for this rink.
    pub hourly_rate: Decimal,
    /// Operational status.
    pub status: RinkStatus,
    /// When the rink was created.
    pub created_at: DateTime<Utc>,
    /// When the rink was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new rink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRink {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Maximum number of skaters.
    pub capacity: i32,
    /// Daily opening time.
    pub opening_time: NaiveTime,
    /// Daily closing time.
    pub closing_time: NaiveTime,
    /// Hourly price.
    pub hourly_rate: Decimal,
}

/// Partial update for an existing rink. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRink {
    /// New display name.
    pub name: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New opening time.
    pub opening_time: Option<NaiveTime>,
    /// New closing time.
    pub closing_time: Option<NaiveTime>,
    /// New hourly price.
    pub hourly_rate: Option<Decimal>,
    /// New operational status.
    pub status: Option<RinkStatus>,
}
