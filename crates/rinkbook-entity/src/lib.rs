//! # rinkbook-entity
//!
//! Plain data structs and enums for all Rinkbook entities. Persistence
//! mechanics live in `rinkbook-database`; business rules in
//! `rinkbook-service`. The only persistence coupling allowed here is
//! `sqlx::FromRow`/`sqlx::Type` derives.

pub mod booking;
pub mod equipment;
pub mod notification;
pub mod rink;
pub mod slot;
pub mod user;
