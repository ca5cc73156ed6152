//! Equipment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Kind of rentable equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "equipment_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EquipmentKind {
    /// Ice skates.
    Skates,
    /// Helmets.
    Helmet,
    /// Hockey sticks.
    Stick,
    /// Protective pads.
    Pads,
    /// Anything else.
    Other,
}

/// Operational status of an equipment pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "equipment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    /// Rentable.
    Available,
    /// Being repaired; not rentable.
    Maintenance,
    /// Removed from service.
    Retired,
}

/// A pool of identical rentable items at a rink.
///
/// `quantity_available` is shared mutable state: it is decremented when a
/// rental is created and restored when the booking is cancelled, always
/// inside the booking's own transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Equipment {
    /// Unique equipment identifier.
    pub id: Uuid,
    /// The rink that owns this equipment.
    pub rink_id: Uuid,
    /// Display name ("Adult skates 42-46").
    pub name: String,
    /// Kind of equipment.
    pub kind: EquipmentKind,
    /// Total units owned.
    pub quantity_total: i32,
    /// Units currently not rented out.
    pub quantity_available: i32,
    /// Operational status.
    pub status: EquipmentStatus,
    /// When the equipment was registered.
    pub created_at: DateTime<Utc>,
    /// When the equipment was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register new equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEquipment {
    /// The rink that owns this equipment.
    pub rink_id: Uuid,
    /// Display name.
    pub name: String,
    /// Kind of equipment.
    pub kind: EquipmentKind,
    /// Total units owned; also the initial available quantity.
    pub quantity_total: i32,
}

/// Partial update for an equipment record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEquipment {
    /// New display name.
    pub name: Option<String>,
    /// New operational status.
    pub status: Option<EquipmentStatus>,
}
