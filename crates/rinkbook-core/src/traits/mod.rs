//! Strategy traits implemented by higher-level crates.
//!
//! The source of each pricing input and the notification transport are
//! deliberately behind traits so the defaults are visible at the type level
//! rather than hidden in stubs.

pub mod discount;
pub mod notify;
pub mod rate;

pub use discount::{DiscountContext, DiscountPolicy, NoDiscount};
pub use notify::NotificationChannel;
pub use rate::RateProvider;
