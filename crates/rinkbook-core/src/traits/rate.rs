//! Hourly rate lookup strategy.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::result::AppResult;

/// Looks up the hourly rate charged for a rink.
///
/// The production implementation reads the rink record; tests substitute a
/// fixed-rate provider.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// The hourly rate for the given rink, in the platform currency.
    async fn hourly_rate(&self, rink_id: Uuid) -> AppResult<Decimal>;
}
