//! User entity model.
//!
//! Deliberately slim: enough identity to own bookings and receive
//! notifications. Authentication and account management are outside this
//! service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, also the notification recipient.
    pub email: String,
    /// Name shown in schedules and confirmations.
    pub display_name: String,
    /// Phone number for SMS notifications.
    pub phone: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Phone number.
    pub phone: Option<String>,
}
