//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::info;

use rinkbook_core::config::worker::WorkerConfig;
use rinkbook_core::error::AppError;
use rinkbook_database::repositories::booking::BookingRepository;
use rinkbook_database::repositories::notification::NotificationRepository;

use crate::jobs;

/// Cron-based scheduler for periodic background tasks.
pub struct WorkerScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    config: WorkerConfig,
    booking_repo: Arc<BookingRepository>,
    notification_repo: Arc<NotificationRepository>,
    /// Retention for sent notifications, in days.
    notification_retain_days: i64,
}

impl std::fmt::Debug for WorkerScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerScheduler").finish()
    }
}

impl WorkerScheduler {
    /// Create a new scheduler.
    pub async fn new(
        config: WorkerConfig,
        booking_repo: Arc<BookingRepository>,
        notification_repo: Arc<NotificationRepository>,
        notification_retain_days: i64,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            config,
            booking_repo,
            notification_repo,
            notification_retain_days,
        })
    }

    /// Register all scheduled tasks.
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_completion_sweep().await?;
        self.register_notification_cleanup().await?;

        info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Cron scheduler shut down");
        Ok(())
    }

    /// Booking completion sweep.
    async fn register_completion_sweep(&self) -> Result<(), AppError> {
        let repo = Arc::clone(&self.booking_repo);
        let job = CronJob::new_async(self.config.completion_sweep_cron.as_str(), move |_uuid, _lock| {
            let repo = Arc::clone(&repo);
            Box::pin(async move {
                jobs::completion::run(repo).await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create completion_sweep schedule: {e}"))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add completion_sweep schedule: {e}"))
        })?;

        info!(cron = %self.config.completion_sweep_cron, "Registered: completion_sweep");
        Ok(())
    }

    /// Notification record cleanup.
    async fn register_notification_cleanup(&self) -> Result<(), AppError> {
        let repo = Arc::clone(&self.notification_repo);
        let retain_days = self.notification_retain_days;
        let job = CronJob::new_async(
            self.config.notification_cleanup_cron.as_str(),
            move |_uuid, _lock| {
                let repo = Arc::clone(&repo);
                Box::pin(async move {
                    jobs::notifications::run(repo, retain_days).await;
                })
            },
        )
        .map_err(|e| {
            AppError::internal(format!("Failed to create notification_cleanup schedule: {e}"))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add notification_cleanup schedule: {e}"))
        })?;

        info!(cron = %self.config.notification_cleanup_cron, "Registered: notification_cleanup");
        Ok(())
    }
}
