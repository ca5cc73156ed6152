//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use rinkbook_core::config::AppConfig;
use rinkbook_database::repositories::user::UserRepository;
use rinkbook_service::booking::BookingService;
use rinkbook_service::equipment::EquipmentService;
use rinkbook_service::rink::RinkService;
use rinkbook_service::schedule::ScheduleService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, for health checks.
    pub db_pool: PgPool,
    /// Booking orchestration.
    pub booking_service: Arc<BookingService>,
    /// Rink management.
    pub rink_service: Arc<RinkService>,
    /// Schedule derivation.
    pub schedule_service: Arc<ScheduleService>,
    /// Equipment inventory.
    pub equipment_service: Arc<EquipmentService>,
    /// User records; slim enough that handlers use the repository directly.
    pub user_repo: Arc<UserRepository>,
}
