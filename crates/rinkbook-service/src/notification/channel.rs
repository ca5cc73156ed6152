//! Notification transports.

use async_trait::async_trait;
use tracing::info;

use rinkbook_core::result::AppResult;
use rinkbook_core::traits::NotificationChannel;

/// A channel that writes each message to the log instead of sending it.
///
/// Stands in for a real email or SMS gateway in development and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogChannel;

#[async_trait]
impl NotificationChannel for LogChannel {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()> {
        info!(recipient, subject, body, "Notification delivered");
        Ok(())
    }
}
