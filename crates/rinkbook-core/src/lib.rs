//! # rinkbook-core
//!
//! Core crate for Rinkbook. Contains configuration schemas, shared types
//! (time ranges, money rounding, pagination), strategy traits for pricing
//! and notifications, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Rinkbook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
