//! Equipment inventory service.
//!
//! Rental quantity changes that accompany a booking happen inside the
//! booking transaction, not here; this service covers the standalone
//! inventory CRUD.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_database::repositories::equipment::EquipmentRepository;
use rinkbook_entity::equipment::{Equipment, EquipmentRental, NewEquipment, UpdateEquipment};

/// Equipment inventory service.
#[derive(Debug, Clone)]
pub struct EquipmentService {
    repo: Arc<EquipmentRepository>,
}

impl EquipmentService {
    /// Create a new equipment service.
    pub fn new(repo: Arc<EquipmentRepository>) -> Self {
        Self { repo }
    }

    /// Get an equipment item by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Equipment> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Equipment {id} not found")))
    }

    /// List the equipment available at a rink.
    pub async fn list_for_rink(&self, rink_id: Uuid) -> AppResult<Vec<Equipment>> {
        self.repo.find_by_rink(rink_id).await
    }

    /// Register a new equipment item.
    pub async fn create(&self, data: NewEquipment) -> AppResult<Equipment> {
        if data.quantity_total < 0 {
            return Err(AppError::validation("Equipment quantity must not be negative"));
        }

        let equipment = self.repo.create(&data).await?;
        info!(equipment_id = %equipment.id, name = %equipment.name, "Equipment registered");
        Ok(equipment)
    }

    /// Update an equipment item.
    pub async fn update(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment> {
        self.get(id).await?;
        let equipment = self.repo.update(id, &data).await?;
        info!(equipment_id = %id, "Equipment updated");
        Ok(equipment)
    }

    /// The rentals attached to a booking.
    pub async fn rentals_for_booking(&self, booking_id: Uuid) -> AppResult<Vec<EquipmentRental>> {
        self.repo.find_rentals_by_booking(booking_id).await
    }
}
