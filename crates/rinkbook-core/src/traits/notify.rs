//! Notification delivery channel strategy.

use async_trait::async_trait;

use crate::result::AppResult;

/// A transport that can deliver a notification to a recipient address
/// (email address, phone number, device token).
///
/// Delivery failures must never affect the booking operation that triggered
/// the notification; the dispatcher retries and logs, nothing more.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Channel name, for logging and the stored notification record.
    fn name(&self) -> &'static str;

    /// Deliver one message. Errors are retried by the dispatcher up to its
    /// configured attempt limit.
    async fn deliver(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()>;
}
