//! Booking notification composition.

use std::sync::Arc;

use tracing::{debug, error};

use rinkbook_core::config::notifications::NotificationsConfig;
use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_database::repositories::notification::NotificationRepository;
use rinkbook_database::repositories::user::UserRepository;
use rinkbook_entity::booking::Booking;
use rinkbook_entity::notification::{NewNotification, NotificationChannelKind};

use super::dispatcher::NotificationDispatcher;

/// Booking lifecycle events that produce a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    /// A booking was created.
    Created,
    /// A pending booking was confirmed.
    Confirmed,
    /// A booking was cancelled.
    Cancelled,
}

impl BookingEvent {
    fn subject(self) -> &'static str {
        match self {
            Self::Created => "Booking received",
            Self::Confirmed => "Booking confirmed",
            Self::Cancelled => "Booking cancelled",
        }
    }
}

/// Builds and queues booking notifications.
#[derive(Clone)]
pub struct NotificationService {
    repo: Arc<NotificationRepository>,
    user_repo: Arc<UserRepository>,
    dispatcher: NotificationDispatcher,
    enabled: bool,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(
        repo: Arc<NotificationRepository>,
        user_repo: Arc<UserRepository>,
        dispatcher: NotificationDispatcher,
        config: &NotificationsConfig,
    ) -> Self {
        Self {
            repo,
            user_repo,
            dispatcher,
            enabled: config.enabled,
        }
    }

    /// Queue a notification for a booking event and return immediately.
    ///
    /// Runs on a spawned task; every failure is logged and swallowed so the
    /// triggering booking operation is never affected.
    pub fn notify(&self, event: BookingEvent, booking: &Booking) {
        if !self.enabled {
            debug!(booking_id = %booking.id, "Notifications disabled, skipping");
            return;
        }

        let service = self.clone();
        let booking = booking.clone();
        tokio::spawn(async move {
            if let Err(e) = service.send(event, &booking).await {
                error!(
                    booking_id = %booking.id,
                    error = %e,
                    "Booking notification failed"
                );
            }
        });
    }

    async fn send(&self, event: BookingEvent, booking: &Booking) -> AppResult<()> {
        let user = self
            .user_repo
            .find_by_id(booking.user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("User {} not found", booking.user_id))
            })?;

        let body = format!(
            "Your booking from {} to {} is {}. Total: {}.",
            booking.start_time.format("%Y-%m-%d %H:%M UTC"),
            booking.end_time.format("%Y-%m-%d %H:%M UTC"),
            booking.status,
            booking.total_price
        );

        let notification = self
            .repo
            .create(&NewNotification {
                user_id: user.id,
                channel: NotificationChannelKind::Email,
                subject: event.subject().to_string(),
                body,
            })
            .await?;

        self.dispatcher.dispatch(notification, user.email).await
    }
}
