//! Rink repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use rinkbook_core::error::{AppError, ErrorKind};
use rinkbook_core::result::AppResult;
use rinkbook_core::types::pagination::{PageRequest, PageResponse};
use rinkbook_entity::rink::{NewRink, Rink, UpdateRink};

/// Repository for rink CRUD and lookup operations.
#[derive(Debug, Clone)]
pub struct RinkRepository {
    pool: PgPool,
}

impl RinkRepository {
    /// Create a new rink repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a rink by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rink>> {
        sqlx::query_as::<_, Rink>("SELECT * FROM rinks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find rink", e))
    }

    /// List rinks with pagination, alphabetical by name.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Rink>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rinks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count rinks", e))?;

        let rinks =
            sqlx::query_as::<_, Rink>("SELECT * FROM rinks ORDER BY name LIMIT $1 OFFSET $2")
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rinks", e))?;

        Ok(PageResponse::new(
            rinks,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Register a new rink.
    pub async fn create(&self, data: &NewRink) -> AppResult<Rink> {
        sqlx::query_as::<_, Rink>(
            "INSERT INTO rinks (name, address, capacity, opening_time, closing_time, hourly_rate) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.capacity)
        .bind(data.opening_time)
        .bind(data.closing_time)
        .bind(data.hourly_rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create rink", e))
    }

    /// Apply a partial update to a rink. `None` fields keep their value.
    pub async fn update(&self, id: Uuid, data: &UpdateRink) -> AppResult<Rink> {
        sqlx::query_as::<_, Rink>(
            "UPDATE rinks SET \
                name = COALESCE($2, name), \
                address = COALESCE($3, address), \
                capacity = COALESCE($4, capacity), \
                opening_time = COALESCE($5, opening_time), \
                closing_time = COALESCE($6, closing_time), \
                hourly_rate = COALESCE($7, hourly_rate), \
                status = COALESCE($8, status), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.capacity)
        .bind(data.opening_time)
        .bind(data.closing_time)
        .bind(data.hourly_rate)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update rink", e))?
        .ok_or_else(|| AppError::not_found(format!("Rink {id} not found")))
    }
}
