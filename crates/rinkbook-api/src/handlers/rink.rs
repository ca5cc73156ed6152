//! Rink handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use rinkbook_core::error::AppError;
use rinkbook_core::types::pagination::PageResponse;
use rinkbook_entity::rink::{NewRink, Rink, UpdateRink};

use crate::dto::request::{CreateRinkRequest, ScheduleQuery, UpdateRinkRequest};
use crate::dto::response::{ApiResponse, ScheduleResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/rinks
pub async fn list_rinks(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Rink>>>, ApiError> {
    let page = state.rink_service.list(params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/rinks/{id}
pub async fn get_rink(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Rink>>, ApiError> {
    let rink = state.rink_service.get(id).await?;
    Ok(Json(ApiResponse::ok(rink)))
}

/// POST /api/rinks
pub async fn create_rink(
    State(state): State<AppState>,
    Json(req): Json<CreateRinkRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Rink>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let rink = state
        .rink_service
        .create(NewRink {
            name: req.name,
            address: req.address,
            capacity: req.capacity,
            opening_time: req.opening_time,
            closing_time: req.closing_time,
            hourly_rate: req.hourly_rate,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(rink))))
}

/// PUT /api/rinks/{id}
pub async fn update_rink(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRinkRequest>,
) -> Result<Json<ApiResponse<Rink>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let rink = state
        .rink_service
        .update(
            id,
            UpdateRink {
                name: req.name,
                address: req.address,
                capacity: req.capacity,
                opening_time: req.opening_time,
                closing_time: req.closing_time,
                hourly_rate: req.hourly_rate,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(rink)))
}

/// GET /api/rinks/{id}/schedule?date=YYYY-MM-DD
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ApiResponse<ScheduleResponse>>, ApiError> {
    let slots = state
        .schedule_service
        .daily_schedule(id, query.date, query.slot_minutes, query.slot_type)
        .await?;

    Ok(Json(ApiResponse::ok(ScheduleResponse {
        rink_id: id,
        date: query.date,
        slots,
    })))
}
