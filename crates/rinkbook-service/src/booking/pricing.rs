//! Booking price calculation.
//!
//! `price = duration_hours * hourly_rate * (1 - discount)`, computed in
//! decimal arithmetic and rounded to 2 places at the boundary. The discount
//! comes from a pluggable [`DiscountPolicy`]; the default applies none.

use std::sync::Arc;

use rust_decimal::Decimal;

use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_core::traits::{DiscountContext, DiscountPolicy};
use rinkbook_core::types::{TimeRange, round_money};

/// Computes booking totals from duration, rate, and discount.
#[derive(Clone)]
pub struct PriceCalculator {
    /// Discount strategy.
    discount: Arc<dyn DiscountPolicy>,
}

impl PriceCalculator {
    /// Create a calculator with the given discount policy.
    pub fn new(discount: Arc<dyn DiscountPolicy>) -> Self {
        Self { discount }
    }

    /// Price the interval at the given hourly rate.
    ///
    /// Fractional hours are priced pro rata. A discount fraction outside
    /// `[0, 1)` is a misconfigured policy, not bad user input.
    pub fn quote(
        &self,
        range: &TimeRange,
        hourly_rate: Decimal,
        ctx: &DiscountContext,
    ) -> AppResult<Decimal> {
        if hourly_rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Hourly rate must not be negative, got {hourly_rate}"
            )));
        }

        let discount = self.discount.discount_fraction(ctx);
        if discount < Decimal::ZERO || discount >= Decimal::ONE {
            return Err(AppError::configuration(format!(
                "Discount policy '{}' returned {discount}, outside [0, 1)",
                self.discount.name()
            )));
        }

        let total = range.duration_hours() * hourly_rate * (Decimal::ONE - discount);
        Ok(round_money(total))
    }
}

impl std::fmt::Debug for PriceCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceCalculator")
            .field("discount", &self.discount.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rinkbook_core::traits::NoDiscount;
    use uuid::Uuid;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, min, 0).unwrap()
    }

    fn ctx() -> DiscountContext {
        DiscountContext {
            user_id: Uuid::new_v4(),
            rink_id: Uuid::new_v4(),
            start_time: at(10, 0),
            end_time: at(11, 0),
        }
    }

    fn calc() -> PriceCalculator {
        PriceCalculator::new(Arc::new(NoDiscount))
    }

    struct HalfOff;

    impl DiscountPolicy for HalfOff {
        fn name(&self) -> &'static str {
            "half_off"
        }
        fn discount_fraction(&self, _ctx: &DiscountContext) -> Decimal {
            Decimal::new(5, 1) // 0.5
        }
    }

    struct Broken;

    impl DiscountPolicy for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }
        fn discount_fraction(&self, _ctx: &DiscountContext) -> Decimal {
            Decimal::ONE
        }
    }

    #[test]
    fn test_whole_hours() {
        let range = TimeRange::new(at(10, 0), at(12, 0)).unwrap();
        let price = calc().quote(&range, Decimal::new(50, 0), &ctx()).unwrap();
        assert_eq!(price, Decimal::new(10000, 2)); // 100.00
    }

    #[test]
    fn test_fractional_hours() {
        let range = TimeRange::new(at(10, 0), at(11, 30)).unwrap();
        let price = calc().quote(&range, Decimal::new(50, 0), &ctx()).unwrap();
        assert_eq!(price, Decimal::new(7500, 2)); // 75.00
    }

    #[test]
    fn test_linear_in_duration() {
        let rate = Decimal::new(4250, 2); // 42.50
        let single = TimeRange::new(at(10, 0), at(11, 0)).unwrap();
        let double = TimeRange::new(at(10, 0), at(12, 0)).unwrap();
        let p1 = calc().quote(&single, rate, &ctx()).unwrap();
        let p2 = calc().quote(&double, rate, &ctx()).unwrap();
        assert_eq!(p2, p1 * Decimal::from(2));
    }

    #[test]
    fn test_discount_applied() {
        let range = TimeRange::new(at(10, 0), at(11, 0)).unwrap();
        let calc = PriceCalculator::new(Arc::new(HalfOff));
        let price = calc.quote(&range, Decimal::new(60, 0), &ctx()).unwrap();
        assert_eq!(price, Decimal::new(3000, 2)); // 30.00
    }

    #[test]
    fn test_rounded_to_two_places() {
        // 1h40m at 10.00/h = 16.666... -> 16.67
        let range = TimeRange::new(at(10, 0), at(11, 40)).unwrap();
        let price = calc().quote(&range, Decimal::new(10, 0), &ctx()).unwrap();
        assert_eq!(price, Decimal::new(1667, 2));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let range = TimeRange::new(at(10, 0), at(11, 0)).unwrap();
        assert!(calc().quote(&range, Decimal::new(-1, 0), &ctx()).is_err());
    }

    #[test]
    fn test_out_of_range_discount_is_configuration_error() {
        let range = TimeRange::new(at(10, 0), at(11, 0)).unwrap();
        let calc = PriceCalculator::new(Arc::new(Broken));
        let err = calc.quote(&range, Decimal::new(50, 0), &ctx()).unwrap_err();
        assert_eq!(err.kind, rinkbook_core::error::ErrorKind::Configuration);
    }
}
