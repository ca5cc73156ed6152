//! Schedule derivation from rink operating hours.

pub mod service;
pub mod slots;

pub use service::ScheduleService;
pub use slots::SlotPlan;
