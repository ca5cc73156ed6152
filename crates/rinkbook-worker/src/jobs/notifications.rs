//! Notification record cleanup.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{error, info};

use rinkbook_database::repositories::notification::NotificationRepository;

/// Delete sent notifications older than `retain_days`.
pub async fn run(repo: Arc<NotificationRepository>, retain_days: i64) {
    let cutoff = Utc::now() - Duration::days(retain_days);
    match repo.delete_sent_before(cutoff).await {
        Ok(0) => {}
        Ok(count) => info!(count, "Deleted old sent notifications"),
        Err(e) => error!(error = %e, "Notification cleanup failed"),
    }
}
