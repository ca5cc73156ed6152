//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Configuration for cron-scheduled maintenance tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the background worker runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron schedule for the booking completion sweep.
    #[serde(default = "default_completion_cron")]
    pub completion_sweep_cron: String,
    /// Cron schedule for notification cleanup.
    #[serde(default = "default_notification_cleanup_cron")]
    pub notification_cleanup_cron: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            completion_sweep_cron: default_completion_cron(),
            notification_cleanup_cron: default_notification_cleanup_cron(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_completion_cron() -> String {
    // Every 5 minutes.
    "0 */5 * * * *".to_string()
}

fn default_notification_cleanup_cron() -> String {
    // Daily at 03:00.
    "0 0 3 * * *".to_string()
}
