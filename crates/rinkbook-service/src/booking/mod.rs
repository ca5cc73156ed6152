//! Booking business rules and orchestration.

pub mod cancellation;
pub mod conflict;
pub mod pricing;
pub mod service;
pub mod validator;

pub use cancellation::CancellationPolicy;
pub use pricing::PriceCalculator;
pub use service::{BookingService, CreateBooking, UpdateBooking};
