//! # rinkbook-worker
//!
//! Cron-scheduled maintenance for Rinkbook. Two jobs run here: the
//! completion sweep, which moves confirmed bookings whose slot has passed
//! to `completed`, and notification cleanup, which deletes old sent
//! notification records. Everything state-changing happens through the
//! repositories; the worker adds only scheduling.

pub mod jobs;
pub mod scheduler;

pub use scheduler::WorkerScheduler;
