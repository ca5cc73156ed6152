//! Rinkbook Server — Ice Rink Booking Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use rinkbook_core::config::AppConfig;
use rinkbook_core::error::AppError;
use rinkbook_core::traits::NoDiscount;
use rinkbook_database::connection::DatabasePool;
use rinkbook_database::repositories::booking::BookingRepository;
use rinkbook_database::repositories::equipment::EquipmentRepository;
use rinkbook_database::repositories::notification::NotificationRepository;
use rinkbook_database::repositories::rink::RinkRepository;
use rinkbook_database::repositories::user::UserRepository;
use rinkbook_service::booking::{BookingService, CancellationPolicy, PriceCalculator};
use rinkbook_service::equipment::EquipmentService;
use rinkbook_service::notification::{LogChannel, NotificationDispatcher, NotificationService};
use rinkbook_service::rink::{RinkRateProvider, RinkService};
use rinkbook_service::schedule::ScheduleService;
use rinkbook_worker::WorkerScheduler;

#[tokio::main]
async fn main() {
    let env = std::env::var("RINKBOOK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Rinkbook v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    db.migrate().await?;
    tracing::info!("Database migrations complete");

    let db_pool = db.pool().clone();

    // ── Repositories ─────────────────────────────────────────────
    let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
    let rink_repo = Arc::new(RinkRepository::new(db_pool.clone()));
    let equipment_repo = Arc::new(EquipmentRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    // ── Services ─────────────────────────────────────────────────
    let dispatcher = NotificationDispatcher::new(
        Arc::clone(&notification_repo),
        Arc::new(LogChannel),
        &config.notifications,
    );
    let notification_service = Arc::new(NotificationService::new(
        Arc::clone(&notification_repo),
        Arc::clone(&user_repo),
        dispatcher,
        &config.notifications,
    ));

    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&rink_repo),
        Arc::clone(&equipment_repo),
        Arc::new(RinkRateProvider::new(Arc::clone(&rink_repo))),
        PriceCalculator::new(Arc::new(NoDiscount)),
        CancellationPolicy::new(config.booking.cancellation_cutoff_hours),
        Arc::clone(&notification_service),
    ));
    let rink_service = Arc::new(RinkService::new(Arc::clone(&rink_repo)));
    let schedule_service = Arc::new(ScheduleService::new(
        Arc::clone(&rink_repo),
        Arc::clone(&booking_repo),
        &config.booking,
    ));
    let equipment_service = Arc::new(EquipmentService::new(Arc::clone(&equipment_repo)));

    // ── Background worker ────────────────────────────────────────
    let mut scheduler = if config.worker.enabled {
        let scheduler = WorkerScheduler::new(
            config.worker.clone(),
            Arc::clone(&booking_repo),
            Arc::clone(&notification_repo),
            config.notifications.cleanup_after_days,
        )
        .await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── HTTP server ──────────────────────────────────────────────
    let state = rinkbook_api::AppState {
        config: Arc::new(config.clone()),
        db_pool,
        booking_service,
        rink_service,
        schedule_service,
        equipment_service,
        user_repo,
    };
    let app = rinkbook_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Rinkbook server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Cleanup ──────────────────────────────────────────────────
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }
    db.close().await;

    tracing::info!("Rinkbook server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
