//! Money rounding rules.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places stored and displayed for money values.
pub const MONEY_SCALE: u32 = 2;

/// Round a money amount to [`MONEY_SCALE`] decimal places.
///
/// Prices are computed with full decimal precision and rounded once, at the
/// persistence/display boundary. Mid-point values round away from zero
/// (2.005 -> 2.01).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(Decimal::new(2005, 3)), Decimal::new(201, 2));
        assert_eq!(round_money(Decimal::new(19999, 4)), Decimal::new(200, 2));
    }

    #[test]
    fn test_round_money_noop_on_exact() {
        assert_eq!(round_money(Decimal::new(4250, 2)), Decimal::new(4250, 2));
    }
}
