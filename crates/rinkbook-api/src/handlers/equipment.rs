//! Equipment handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use rinkbook_core::error::AppError;
use rinkbook_entity::equipment::{Equipment, NewEquipment, UpdateEquipment};

use crate::dto::request::{CreateEquipmentRequest, UpdateEquipmentRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/rinks/{id}/equipment
pub async fn list_rink_equipment(
    State(state): State<AppState>,
    Path(rink_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Equipment>>>, ApiError> {
    let equipment = state.equipment_service.list_for_rink(rink_id).await?;
    Ok(Json(ApiResponse::ok(equipment)))
}

/// GET /api/equipment/{id}
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Equipment>>, ApiError> {
    let equipment = state.equipment_service.get(id).await?;
    Ok(Json(ApiResponse::ok(equipment)))
}

/// POST /api/equipment
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(req): Json<CreateEquipmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Equipment>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let equipment = state
        .equipment_service
        .create(NewEquipment {
            rink_id: req.rink_id,
            name: req.name,
            kind: req.kind,
            quantity_total: req.quantity_total,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(equipment))))
}

/// PUT /api/equipment/{id}
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEquipmentRequest>,
) -> Result<Json<ApiResponse<Equipment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let equipment = state
        .equipment_service
        .update(
            id,
            UpdateEquipment {
                name: req.name,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(equipment)))
}
