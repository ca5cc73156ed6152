//! # rinkbook-service
//!
//! Business logic for Rinkbook. The booking module carries the core rules:
//! validation, interval conflict checking, price calculation, and the
//! cancellation policy. The schedule module derives ice slots from rink
//! operating hours. The remaining modules orchestrate repositories for
//! rinks, equipment, and notifications.

pub mod booking;
pub mod equipment;
pub mod notification;
pub mod rink;
pub mod schedule;
