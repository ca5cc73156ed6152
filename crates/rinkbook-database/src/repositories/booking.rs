//! Booking repository implementation.
//!
//! Booking creation and cancellation are check-then-write sequences, so the
//! repository exposes transaction-scoped variants of its operations. The
//! service layer opens a transaction, takes the per-rink advisory lock,
//! reads overlapping rows, and commits its writes as one unit. Two
//! concurrent requests for the same rink serialize on the lock; the loser
//! sees the winner's row.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use rinkbook_core::error::{AppError, ErrorKind};
use rinkbook_core::result::AppResult;
use rinkbook_core::types::TimeRange;
use rinkbook_core::types::pagination::{PageRequest, PageResponse};
use rinkbook_entity::booking::{Booking, BookingStatus, NewBooking};

/// Repository for booking persistence and interval queries.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

const OVERLAP_SQL: &str = "SELECT * FROM bookings \
     WHERE rink_id = $1 AND status IN ('pending', 'confirmed') \
       AND start_time < $3 AND end_time > $2 \
       AND ($4::uuid IS NULL OR id <> $4) \
     ORDER BY start_time";

const UPDATE_STATUS_SQL: &str = "UPDATE bookings SET status = $2, updated_at = NOW() \
     WHERE id = $1 AND status = ANY($3) RETURNING *";

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction for a check-and-write sequence.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))
    }

    /// Take the per-rink advisory lock for the rest of the transaction.
    ///
    /// Serializes every check-and-insert for one rink without blocking
    /// bookings on other rinks.
    pub async fn lock_rink(tx: &mut Transaction<'_, Postgres>, rink_id: Uuid) -> AppResult<()> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1::text, 0))")
            .bind(rink_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock rink", e))?;
        Ok(())
    }

    /// Find active bookings on a rink overlapping the given interval.
    ///
    /// Half-open semantics: a booking ending exactly at `range.start` does
    /// not match. `exclude` skips one booking id, for self-overlap checks
    /// during updates.
    pub async fn find_overlapping(
        &self,
        rink_id: Uuid,
        range: &TimeRange,
        exclude: Option<Uuid>,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(OVERLAP_SQL)
            .bind(rink_id)
            .bind(range.start)
            .bind(range.end)
            .bind(exclude)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find overlapping bookings", e)
            })
    }

    /// Transaction-scoped variant of [`Self::find_overlapping`].
    pub async fn find_overlapping_in(
        tx: &mut Transaction<'_, Postgres>,
        rink_id: Uuid,
        range: &TimeRange,
        exclude: Option<Uuid>,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(OVERLAP_SQL)
            .bind(rink_id)
            .bind(range.start)
            .bind(range.end)
            .bind(exclude)
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find overlapping bookings", e)
            })
    }

    /// Insert a new booking inside an open transaction.
    pub async fn insert_in(
        tx: &mut Transaction<'_, Postgres>,
        data: &NewBooking,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, rink_id, start_time, end_time, slot_type, total_price, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.rink_id)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.slot_type)
        .bind(data.total_price)
        .bind(&data.notes)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    /// Find a booking by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// Read a booking inside an open transaction, taking its row lock.
    ///
    /// `FOR UPDATE` serializes concurrent transitions on the same booking:
    /// the second transaction blocks here until the first commits, then
    /// sees its status.
    pub async fn find_by_id_in(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// List a user's bookings, newest first, with pagination.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))?;

        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Bookings on a rink intersecting `[start, end)`, for schedule
    /// generation. All statuses are returned; the slot generator decides
    /// which ones block.
    pub async fn find_by_rink_and_range(
        &self,
        rink_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings \
             WHERE rink_id = $1 AND start_time < $3 AND end_time > $2 \
             ORDER BY start_time",
        )
        .bind(rink_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list bookings for range", e)
        })
    }

    /// Move a booking to `status`, guarded by the transition matrix.
    ///
    /// Compare-and-set: the row is written only while its current status is
    /// one that may transition into `status`, so a write racing another
    /// transition matches zero rows and returns `None` instead of
    /// overwriting it. `None` also covers a missing row; callers re-read to
    /// tell the two apart.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(UPDATE_STATUS_SQL)
            .bind(id)
            .bind(status)
            .bind(BookingStatus::sources_of(status))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
            })
    }

    /// Transaction-scoped variant of [`Self::update_status`].
    pub async fn update_status_in(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(UPDATE_STATUS_SQL)
            .bind(id)
            .bind(status)
            .bind(BookingStatus::sources_of(status))
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
            })
    }

    /// Rewrite a booking's interval, price, and notes inside an open
    /// transaction, after the overlap check has passed.
    ///
    /// Only active bookings are rescheduled; `None` means the row is
    /// missing or left the active statuses since it was read.
    pub async fn update_times_in(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        range: &TimeRange,
        total_price: rust_decimal::Decimal,
        notes: &Option<String>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET start_time = $2, end_time = $3, total_price = $4, notes = $5, \
             updated_at = NOW() \
             WHERE id = $1 AND status IN ('pending', 'confirmed') RETURNING *",
        )
        .bind(id)
        .bind(range.start)
        .bind(range.end)
        .bind(total_price)
        .bind(notes)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booking", e))
    }

    /// Mark confirmed bookings whose interval has fully passed as completed.
    ///
    /// Used by the background completion sweep; `confirmed -> completed` is
    /// the only automated transition.
    pub async fn mark_completed_before(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE bookings SET status = 'completed', updated_at = NOW() \
             WHERE status = 'confirmed' AND end_time <= $1",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to complete past bookings", e)
        })?;

        Ok(result.rows_affected())
    }
}
