//! Booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use rinkbook_core::error::AppError;
use rinkbook_core::types::pagination::PageResponse;
use rinkbook_entity::booking::Booking;
use rinkbook_service::booking::{CreateBooking, UpdateBooking};

use crate::dto::request::{CreateBookingRequest, UpdateBookingRequest};
use crate::dto::response::{ApiResponse, BookingResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let booking = state
        .booking_service
        .create(CreateBooking {
            user_id: req.user_id,
            rink_id: req.rink_id,
            start_time: req.start_time,
            end_time: req.end_time,
            slot_type: req.slot_type,
            total_price: req.total_price,
            notes: req.notes,
            rentals: req.rentals,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booking))))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let booking = state.booking_service.get(id).await?;
    let rentals = state.equipment_service.rentals_for_booking(id).await?;

    Ok(Json(ApiResponse::ok(BookingResponse { booking, rentals })))
}

/// Query parameters for listing bookings.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BookingListQuery {
    /// The user whose bookings to list.
    pub user_id: Uuid,
    /// Page number (1-based, default: 1).
    #[serde(default)]
    pub page: Option<u64>,
    /// Items per page (default: 25, max: 100).
    #[serde(default)]
    pub per_page: Option<u64>,
}

/// GET /api/bookings?user_id=
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Booking>>>, ApiError> {
    let params = PaginationParams {
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(25),
    };
    let page = state
        .booking_service
        .list_for_user(query.user_id, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/users/{id}/bookings
pub async fn list_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Booking>>>, ApiError> {
    let page = state
        .booking_service
        .list_for_user(user_id, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/bookings/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let booking = state
        .booking_service
        .update(
            id,
            UpdateBooking {
                start_time: req.start_time,
                end_time: req.end_time,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(booking)))
}

/// POST /api/bookings/{id}/confirm
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state.booking_service.confirm(id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// POST /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state.booking_service.cancel(id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}
