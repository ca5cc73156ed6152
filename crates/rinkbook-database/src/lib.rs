//! # rinkbook-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all Rinkbook entities.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
