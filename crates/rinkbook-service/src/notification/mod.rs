//! Fire-and-forget booking notifications.
//!
//! Booking operations call [`NotificationService::notify`] after their
//! transaction commits. The service builds the message, persists a pending
//! record, and hands it to the dispatcher on a spawned task; nothing in
//! this module can fail a booking operation.

pub mod channel;
pub mod dispatcher;
pub mod service;

pub use channel::LogChannel;
pub use dispatcher::NotificationDispatcher;
pub use service::{BookingEvent, NotificationService};
