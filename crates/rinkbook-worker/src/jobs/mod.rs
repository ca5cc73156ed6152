//! Maintenance job implementations.

pub mod completion;
pub mod notifications;
