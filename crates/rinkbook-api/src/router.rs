//! Route definitions for the Rinkbook HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(booking_routes())
        .merge(rink_routes())
        .merge(equipment_routes())
        .merge(user_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Booking lifecycle endpoints.
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create_booking))
        .route("/bookings", get(handlers::booking::list_bookings))
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route("/bookings/{id}", put(handlers::booking::update_booking))
        .route(
            "/bookings/{id}/confirm",
            post(handlers::booking::confirm_booking),
        )
        .route(
            "/bookings/{id}/cancel",
            post(handlers::booking::cancel_booking),
        )
}

/// Rink CRUD and derived schedule.
fn rink_routes() -> Router<AppState> {
    Router::new()
        .route("/rinks", get(handlers::rink::list_rinks))
        .route("/rinks", post(handlers::rink::create_rink))
        .route("/rinks/{id}", get(handlers::rink::get_rink))
        .route("/rinks/{id}", put(handlers::rink::update_rink))
        .route("/rinks/{id}/schedule", get(handlers::rink::get_schedule))
        .route(
            "/rinks/{id}/equipment",
            get(handlers::equipment::list_rink_equipment),
        )
}

/// Equipment inventory endpoints.
fn equipment_routes() -> Router<AppState> {
    Router::new()
        .route("/equipment", post(handlers::equipment::create_equipment))
        .route("/equipment/{id}", get(handlers::equipment::get_equipment))
        .route("/equipment/{id}", put(handlers::equipment::update_equipment))
}

/// User endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route(
            "/users/{id}/bookings",
            get(handlers::booking::list_user_bookings),
        )
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;
    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
