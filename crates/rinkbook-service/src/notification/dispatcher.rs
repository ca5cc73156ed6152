//! Notification delivery with bounded retries.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, warn};

use rinkbook_core::config::notifications::NotificationsConfig;
use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_core::traits::NotificationChannel;
use rinkbook_database::repositories::notification::NotificationRepository;
use rinkbook_entity::notification::{Notification, NotificationStatus};

/// Delivers stored notifications through a channel, retrying with doubling
/// backoff up to the configured attempt limit.
#[derive(Clone)]
pub struct NotificationDispatcher {
    repo: Arc<NotificationRepository>,
    channel: Arc<dyn NotificationChannel>,
    max_attempts: u32,
    base_backoff: Duration,
}

impl NotificationDispatcher {
    /// Create a new dispatcher.
    pub fn new(
        repo: Arc<NotificationRepository>,
        channel: Arc<dyn NotificationChannel>,
        config: &NotificationsConfig,
    ) -> Self {
        Self {
            repo,
            channel,
            max_attempts: config.max_attempts.max(1),
            base_backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }

    /// Deliver one notification to `recipient`, recording the outcome on
    /// the stored record.
    ///
    /// Returns `ExternalService` once every attempt has failed; the record
    /// is marked failed either way, and failures to record an outcome are
    /// only logged.
    pub async fn dispatch(&self, notification: Notification, recipient: String) -> AppResult<()> {
        let mut backoff = self.base_backoff;

        for attempt in 1..=self.max_attempts {
            match self
                .channel
                .deliver(&recipient, &notification.subject, &notification.body)
                .await
            {
                Ok(()) => {
                    if let Err(e) = self
                        .repo
                        .record_attempt(notification.id, NotificationStatus::Sent, attempt as i32)
                        .await
                    {
                        error!(notification_id = %notification.id, error = %e, "Failed to record notification delivery");
                    }
                    return Ok(());
                }
                Err(e) => {
                    warn!(
                        notification_id = %notification.id,
                        channel = self.channel.name(),
                        attempt,
                        error = %e,
                        "Notification delivery attempt failed"
                    );
                    if attempt < self.max_attempts {
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                    }
                }
            }
        }

        if let Err(e) = self
            .repo
            .record_attempt(
                notification.id,
                NotificationStatus::Failed,
                self.max_attempts as i32,
            )
            .await
        {
            error!(notification_id = %notification.id, error = %e, "Failed to record notification failure");
        }

        Err(AppError::external_service(format!(
            "Notification {} undelivered after {} attempts via {}",
            notification.id,
            self.max_attempts,
            self.channel.name()
        )))
    }
}
