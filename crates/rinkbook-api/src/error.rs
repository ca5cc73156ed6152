//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use rinkbook_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype over [`AppError`] carrying the HTTP mapping.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets service
/// errors propagate with `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::CancellationWindow => (StatusCode::BAD_REQUEST, "CANCELLATION_WINDOW"),
            ErrorKind::AlreadyCancelled => (StatusCode::BAD_REQUEST, "ALREADY_CANCELLED"),
            ErrorKind::InvalidTransition => (StatusCode::BAD_REQUEST, "INVALID_TRANSITION"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::ExternalService
            | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                // Internals are not leaked to clients.
                let body = ApiErrorResponse {
                    error: "INTERNAL_ERROR".to_string(),
                    message: "An internal error occurred".to_string(),
                };
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_for(AppError::validation("bad input")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_cancellation_errors_map_to_400() {
        assert_eq!(
            status_for(AppError::cancellation_window("too late")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(AppError::already_cancelled("already done")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_for(AppError::not_found("missing")),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_maps_to_409() {
        assert_eq!(
            status_for(AppError::conflict("overlap")),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_service_unavailable_maps_to_503() {
        assert_eq!(
            status_for(AppError::service_unavailable("database unreachable")),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_database_maps_to_500_without_leaking() {
        let response = ApiError(AppError::database("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
