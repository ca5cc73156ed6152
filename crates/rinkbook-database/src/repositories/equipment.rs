//! Equipment repository implementation.
//!
//! Quantity changes always happen inside the owning booking's transaction:
//! the decrement carries its own availability guard in the `WHERE` clause,
//! so an insufficient pool shows up as zero rows affected rather than a
//! negative quantity.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use rinkbook_core::error::{AppError, ErrorKind};
use rinkbook_core::result::AppResult;
use rinkbook_entity::equipment::{Equipment, EquipmentRental, NewEquipment, UpdateEquipment};

/// Repository for equipment CRUD and rental bookkeeping.
#[derive(Debug, Clone)]
pub struct EquipmentRepository {
    pool: PgPool,
}

impl EquipmentRepository {
    /// Create a new equipment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find equipment by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Equipment>> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find equipment", e))
    }

    /// List all equipment at a rink.
    pub async fn find_by_rink(&self, rink_id: Uuid) -> AppResult<Vec<Equipment>> {
        sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipment WHERE rink_id = $1 ORDER BY name",
        )
        .bind(rink_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list equipment", e))
    }

    /// Register new equipment. The full quantity starts available.
    pub async fn create(&self, data: &NewEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            "INSERT INTO equipment (rink_id, name, kind, quantity_total, quantity_available) \
             VALUES ($1, $2, $3, $4, $4) RETURNING *",
        )
        .bind(data.rink_id)
        .bind(&data.name)
        .bind(data.kind)
        .bind(data.quantity_total)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create equipment", e))
    }

    /// Apply a partial update to an equipment record.
    pub async fn update(&self, id: Uuid, data: &UpdateEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            "UPDATE equipment SET \
                name = COALESCE($2, name), \
                status = COALESCE($3, status), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update equipment", e))?
        .ok_or_else(|| AppError::not_found(format!("Equipment {id} not found")))
    }

    /// Reserve `quantity` units inside an open transaction.
    ///
    /// Fails with `Conflict` when the pool has fewer units available or the
    /// equipment is not in rentable status.
    pub async fn decrement_in(
        tx: &mut Transaction<'_, Postgres>,
        equipment_id: Uuid,
        quantity: i32,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE equipment SET quantity_available = quantity_available - $2, updated_at = NOW() \
             WHERE id = $1 AND status = 'available' AND quantity_available >= $2",
        )
        .bind(equipment_id)
        .bind(quantity)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reserve equipment", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(format!(
                "Equipment {equipment_id} does not have {quantity} units available"
            )));
        }
        Ok(())
    }

    /// Return `quantity` units to the pool inside an open transaction.
    ///
    /// Capped at `quantity_total` so a stray double-restore cannot overfill
    /// the pool.
    pub async fn restore_in(
        tx: &mut Transaction<'_, Postgres>,
        equipment_id: Uuid,
        quantity: i32,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE equipment SET \
                quantity_available = LEAST(quantity_available + $2, quantity_total), \
                updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(equipment_id)
        .bind(quantity)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to restore equipment", e))?;
        Ok(())
    }

    /// Record a rental line item inside an open transaction.
    pub async fn insert_rental_in(
        tx: &mut Transaction<'_, Postgres>,
        booking_id: Uuid,
        equipment_id: Uuid,
        quantity: i32,
    ) -> AppResult<EquipmentRental> {
        sqlx::query_as::<_, EquipmentRental>(
            "INSERT INTO equipment_rentals (booking_id, equipment_id, quantity) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(booking_id)
        .bind(equipment_id)
        .bind(quantity)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record rental", e))
    }

    /// List rental line items for a booking.
    pub async fn find_rentals_by_booking(
        &self,
        booking_id: Uuid,
    ) -> AppResult<Vec<EquipmentRental>> {
        sqlx::query_as::<_, EquipmentRental>(
            "SELECT * FROM equipment_rentals WHERE booking_id = $1",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rentals", e))
    }

    /// Transaction-scoped variant of [`Self::find_rentals_by_booking`].
    pub async fn find_rentals_by_booking_in(
        tx: &mut Transaction<'_, Postgres>,
        booking_id: Uuid,
    ) -> AppResult<Vec<EquipmentRental>> {
        sqlx::query_as::<_, EquipmentRental>(
            "SELECT * FROM equipment_rentals WHERE booking_id = $1",
        )
        .bind(booking_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rentals", e))
    }
}
