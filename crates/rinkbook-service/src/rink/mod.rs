//! Rink management.

pub mod rate;
pub mod service;

pub use rate::RinkRateProvider;
pub use service::RinkService;
