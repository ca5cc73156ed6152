//! Concrete repository implementations.

pub mod booking;
pub mod equipment;
pub mod notification;
pub mod rink;
pub mod user;
