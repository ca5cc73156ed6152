//! Rink availability status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of a rink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rink_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RinkStatus {
    /// Open and accepting bookings.
    Active,
    /// Temporarily unavailable (resurfacing, repairs).
    Maintenance,
    /// Permanently or seasonally closed.
    Closed,
}

impl RinkStatus {
    /// Whether new bookings are accepted for a rink in this status.
    pub fn accepts_bookings(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for RinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RinkStatus {
    type Err = rinkbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            "closed" => Ok(Self::Closed),
            _ => Err(rinkbook_core::AppError::validation(format!(
                "Invalid rink status: '{s}'. Expected one of: active, maintenance, closed"
            ))),
        }
    }
}
