//! Booking business-rule configuration.

use serde::{Deserialize, Serialize};

/// Configuration for booking validation, cancellation, and slot generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Minimum lead time before a booking's start during which cancellation
    /// is disallowed, in hours.
    #[serde(default = "default_cancellation_cutoff")]
    pub cancellation_cutoff_hours: i64,
    /// Slot duration used for schedule generation when the request does not
    /// specify one, in minutes.
    #[serde(default = "default_slot_minutes")]
    pub default_slot_minutes: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            cancellation_cutoff_hours: default_cancellation_cutoff(),
            default_slot_minutes: default_slot_minutes(),
        }
    }
}

fn default_cancellation_cutoff() -> i64 {
    24
}

fn default_slot_minutes() -> u32 {
    60
}
