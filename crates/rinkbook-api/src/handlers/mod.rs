//! HTTP request handlers.

pub mod booking;
pub mod equipment;
pub mod health;
pub mod rink;
pub mod user;
