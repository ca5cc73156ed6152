//! Stored notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Delivery transport for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_channel", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannelKind {
    /// Email delivery.
    Email,
    /// SMS delivery.
    Sms,
    /// Mobile push delivery.
    Push,
}

/// Delivery state of a stored notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Queued for delivery.
    Pending,
    /// Delivered successfully.
    Sent,
    /// All delivery attempts exhausted.
    Failed,
}

/// A notification queued for or delivered to a user.
///
/// Booking operations create these fire-and-forget; delivery failure never
/// rolls back the booking.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Transport used.
    pub channel: NotificationChannelKind,
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Delivery state.
    pub status: NotificationStatus,
    /// Delivery attempts made so far.
    pub attempts: i32,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the notification was last updated (attempt, success, failure).
    pub updated_at: DateTime<Utc>,
}

/// Data required to enqueue a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: Uuid,
    /// Transport to use.
    pub channel: NotificationChannelKind,
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}
