//! Property-based tests for currency conversion and rounding primitives.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::convert_amount;
use crate::arithmetic;

/// Strategy to generate signed decimal amounts (-1,000,000.000 to 1,000,000.000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|mills| Decimal::new(mills, 3))
}

/// Strategy to generate positive exchange rates (0.000001 to 10000.000000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate decimal places (0 to 6).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=6
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converted figures never carry more places than requested.
    #[test]
    fn prop_convert_respects_precision(
        amount in amount(),
        rate in positive_rate(),
        dp in decimal_places(),
    ) {
        let result = convert_amount(amount, rate, dp);
        prop_assert!(result.scale() <= dp, "{} has scale above {}", result, dp);
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in amount(),
        rate in positive_rate(),
        dp in decimal_places(),
    ) {
        prop_assert_eq!(convert_amount(amount, rate, dp), convert_amount(amount, rate, dp));
    }

    /// A unit rate only rounds.
    #[test]
    fn prop_unit_rate_preserves_amount(amount in amount(), dp in decimal_places()) {
        prop_assert_eq!(convert_amount(amount, Decimal::ONE, dp), arithmetic::round(amount, dp));
    }

    /// Rounding is symmetric around zero.
    #[test]
    fn prop_round_is_symmetric(amount in amount(), dp in decimal_places()) {
        prop_assert_eq!(arithmetic::round(-amount, dp), -arithmetic::round(amount, dp));
    }

    /// Rounding moves a value by at most half a unit.
    #[test]
    fn prop_round_error_bounded(amount in amount(), dp in decimal_places()) {
        let half_unit = Decimal::new(5, dp + 1);
        let error = (arithmetic::round(amount, dp) - amount).abs();
        prop_assert!(error <= half_unit);
    }

    /// Rounding an already rounded value is a no-op.
    #[test]
    fn prop_round_is_idempotent(amount in amount(), dp in decimal_places()) {
        let once = arithmetic::round(amount, dp);
        prop_assert_eq!(arithmetic::round(once, dp), once);
    }

    /// Division by zero never panics and yields zero.
    #[test]
    fn prop_divide_by_zero_is_zero(amount in amount(), dp in decimal_places()) {
        prop_assert_eq!(arithmetic::divide(amount, Decimal::ZERO, dp), Decimal::ZERO);
    }
}
