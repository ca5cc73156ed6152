//! Rink CRUD service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_core::types::pagination::{PageRequest, PageResponse};
use rinkbook_database::repositories::rink::RinkRepository;
use rinkbook_entity::rink::{NewRink, Rink, UpdateRink};

/// Rink management service.
#[derive(Debug, Clone)]
pub struct RinkService {
    repo: Arc<RinkRepository>,
}

impl RinkService {
    /// Create a new rink service.
    pub fn new(repo: Arc<RinkRepository>) -> Self {
        Self { repo }
    }

    /// Get a rink by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Rink> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Rink {id} not found")))
    }

    /// List rinks with pagination.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Rink>> {
        self.repo.find_all(&page).await
    }

    /// Create a rink.
    pub async fn create(&self, data: NewRink) -> AppResult<Rink> {
        if data.opening_time >= data.closing_time {
            return Err(AppError::validation(format!(
                "Opening time {} must be before closing time {}",
                data.opening_time, data.closing_time
            )));
        }
        if data.hourly_rate < rust_decimal::Decimal::ZERO {
            return Err(AppError::validation("Hourly rate must not be negative"));
        }

        let rink = self.repo.create(&data).await?;
        info!(rink_id = %rink.id, name = %rink.name, "Rink created");
        Ok(rink)
    }

    /// Update a rink's details.
    pub async fn update(&self, id: Uuid, data: UpdateRink) -> AppResult<Rink> {
        let current = self.get(id).await?;
        let opening = data.opening_time.unwrap_or(current.opening_time);
        let closing = data.closing_time.unwrap_or(current.closing_time);
        if opening >= closing {
            return Err(AppError::validation(format!(
                "Opening time {opening} must be before closing time {closing}"
            )));
        }
        if let Some(rate) = data.hourly_rate {
            if rate < rust_decimal::Decimal::ZERO {
                return Err(AppError::validation("Hourly rate must not be negative"));
            }
        }

        let rink = self.repo.update(id, &data).await?;
        info!(rink_id = %id, "Rink updated");
        Ok(rink)
    }
}
