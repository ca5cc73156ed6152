//! User handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use rinkbook_core::error::AppError;
use rinkbook_entity::user::{NewUser, User};

use crate::dto::request::CreateUserRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if state.user_repo.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict(format!(
            "A user with email {} already exists",
            req.email
        ))
        .into());
    }

    let user = state
        .user_repo
        .create(&NewUser {
            email: req.email,
            display_name: req.display_name,
            phone: req.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

    Ok(Json(ApiResponse::ok(user)))
}
