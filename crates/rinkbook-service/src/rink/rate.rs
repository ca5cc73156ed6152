//! Hourly rate lookup backed by the rinks table.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_core::traits::RateProvider;
use rinkbook_database::repositories::rink::RinkRepository;

/// [`RateProvider`] that reads each rink's stored hourly rate.
#[derive(Debug, Clone)]
pub struct RinkRateProvider {
    repo: Arc<RinkRepository>,
}

impl RinkRateProvider {
    /// Create a new rate provider over the rink repository.
    pub fn new(repo: Arc<RinkRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RateProvider for RinkRateProvider {
    async fn hourly_rate(&self, rink_id: Uuid) -> AppResult<Decimal> {
        let rink = self
            .repo
            .find_by_id(rink_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Rink {rink_id} not found")))?;
        Ok(rink.hourly_rate)
    }
}
