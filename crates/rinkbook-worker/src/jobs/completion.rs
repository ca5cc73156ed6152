//! Booking completion sweep.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use rinkbook_database::repositories::booking::BookingRepository;

/// Move confirmed bookings whose end time has passed to `completed`.
///
/// `confirmed -> completed` is the only transition performed without a user
/// action, so it lives here rather than in the booking service.
pub async fn run(repo: Arc<BookingRepository>) {
    match repo.mark_completed_before(Utc::now()).await {
        Ok(0) => {}
        Ok(count) => info!(count, "Completed past bookings"),
        Err(e) => error!(error = %e, "Booking completion sweep failed"),
    }
}
