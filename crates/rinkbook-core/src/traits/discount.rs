//! Discount policy strategy.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Attributes of a booking that a discount policy may inspect.
#[derive(Debug, Clone)]
pub struct DiscountContext {
    /// The user making the booking.
    pub user_id: Uuid,
    /// The rink being booked.
    pub rink_id: Uuid,
    /// Booking start time.
    pub start_time: DateTime<Utc>,
    /// Booking end time.
    pub end_time: DateTime<Utc>,
}

/// Computes the discount fraction applied to a booking's price.
///
/// Implementations must return a value in `[0, 1)`; the price calculator
/// rejects anything outside that range as a configuration error. Loyalty,
/// promotional-code, and off-peak policies all plug in here.
pub trait DiscountPolicy: Send + Sync {
    /// Name of the policy, for logging.
    fn name(&self) -> &'static str;

    /// The discount fraction for the given booking attributes.
    fn discount_fraction(&self, ctx: &DiscountContext) -> Decimal;
}

/// The default policy: no discount is ever applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn name(&self) -> &'static str {
        "no_discount"
    }

    fn discount_fraction(&self, _ctx: &DiscountContext) -> Decimal {
        Decimal::ZERO
    }
}
