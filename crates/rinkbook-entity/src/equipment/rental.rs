//! Equipment rental line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Links a booking to a quantity of rented equipment.
///
/// Created atomically with the booking; the rented quantity is returned to
/// the equipment pool when the booking is cancelled.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EquipmentRental {
    /// Unique rental identifier.
    pub id: Uuid,
    /// The booking this rental belongs to.
    pub booking_id: Uuid,
    /// The equipment pool rented from.
    pub equipment_id: Uuid,
    /// Units rented.
    pub quantity: i32,
    /// When the rental was created.
    pub created_at: DateTime<Utc>,
}
