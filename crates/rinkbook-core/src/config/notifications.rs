//! Notification delivery configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the fire-and-forget notification dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Whether notification delivery is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum delivery attempts per notification.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base backoff between delivery attempts, in milliseconds. Doubled on
    /// each retry.
    #[serde(default = "default_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Delete sent notifications older than this many days.
    #[serde(default = "default_cleanup_after_days")]
    pub cleanup_after_days: i64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: default_max_attempts(),
            retry_backoff_ms: default_backoff_ms(),
            cleanup_after_days: default_cleanup_after_days(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    500
}

fn default_cleanup_after_days() -> i64 {
    30
}
