//! # rinkbook-api
//!
//! HTTP surface for Rinkbook, built on Axum. Routes live in [`router`],
//! request/response shapes in [`dto`], and the domain-error-to-status
//! mapping in [`error`]. Handlers stay thin: extract, call a service,
//! wrap the result.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
