//! Notification repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use rinkbook_core::error::{AppError, ErrorKind};
use rinkbook_core::result::AppResult;
use rinkbook_entity::notification::{NewNotification, Notification, NotificationStatus};

/// Repository for stored notification records.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Enqueue a notification in `pending` state.
    pub async fn create(&self, data: &NewNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, channel, subject, body) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.channel)
        .bind(&data.subject)
        .bind(&data.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// Record a delivery attempt and its outcome.
    pub async fn record_attempt(
        &self,
        id: Uuid,
        status: NotificationStatus,
        attempts: i32,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE notifications SET status = $2, attempts = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .bind(attempts)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update notification", e)
        })?;
        Ok(())
    }

    /// List a user's notifications, newest first.
    pub async fn find_by_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Delete sent notifications older than the cutoff.
    pub async fn delete_sent_before(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM notifications WHERE status = 'sent' AND created_at < $1",
        )
        .bind(before)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to cleanup notifications", e)
        })?;

        Ok(result.rows_affected())
    }
}
