//! Derived ice slots.
//!
//! Slots are a projection of a rink's operating hours cross-referenced with
//! its bookings. They are recomputed per query and never persisted, so there
//! is no slots table to drift out of sync with the bookings table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of ice time a slot or booking is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "slot_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    /// Open public skating.
    Public,
    /// Hockey practice or games.
    Hockey,
    /// Figure skating.
    FigureSkating,
    /// Coached lessons.
    Lesson,
    /// Private hire.
    Private,
}

impl Default for SlotType {
    fn default() -> Self {
        Self::Public
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Public => "public",
            Self::Hockey => "hockey",
            Self::FigureSkating => "figure_skating",
            Self::Lesson => "lesson",
            Self::Private => "private",
        };
        write!(f, "{s}")
    }
}

/// Availability of a derived slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// No active booking overlaps this slot.
    Available,
    /// An active booking overlaps this slot.
    Booked,
    /// Held by staff; not offered to users.
    Reserved,
    /// Withdrawn (rink maintenance or closure).
    Cancelled,
}

/// A discrete bookable interval derived from a rink's operating hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceSlot {
    /// The rink this slot belongs to.
    pub rink_id: Uuid,
    /// Slot start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Slot end (exclusive).
    pub end_time: DateTime<Utc>,
    /// Kind of ice time.
    pub slot_type: SlotType,
    /// Computed availability.
    pub status: SlotStatus,
}
