//! Precision-aware arithmetic primitives.
//!
//! Every operation rounds its result to the requested number of decimal places
//! using half-away-from-zero rounding (`2.345 -> 2.35`, `-2.345 -> -2.35`).
//! Operations never panic: division by zero and overflow both yield `0`.
//! Malformed input is expected to have been coerced by [`crate::sanitize`].

use ledgercalc_shared::types::precision::MAX_DECIMALS;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Rounding strategy applied to every figure the engine produces.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounds `value` to `decimals` places.
#[inline]
#[must_use]
pub fn round(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals.min(MAX_DECIMALS), ROUNDING)
}

/// `a + b`, rounded.
#[must_use]
pub fn add(a: Decimal, b: Decimal, decimals: u32) -> Decimal {
    round(a.checked_add(b).unwrap_or_default(), decimals)
}

/// `a - b`, rounded.
#[must_use]
pub fn subtract(a: Decimal, b: Decimal, decimals: u32) -> Decimal {
    round(a.checked_sub(b).unwrap_or_default(), decimals)
}

/// `a * b`, rounded.
#[must_use]
pub fn multiply(a: Decimal, b: Decimal, decimals: u32) -> Decimal {
    round(a.checked_mul(b).unwrap_or_default(), decimals)
}

/// `a / b`, rounded. A zero divisor yields zero.
#[must_use]
pub fn divide(a: Decimal, b: Decimal, decimals: u32) -> Decimal {
    if b.is_zero() {
        return Decimal::ZERO;
    }
    round(a.checked_div(b).unwrap_or_default(), decimals)
}

/// `amount * percentage / 100`, rounded once at the end.
#[must_use]
pub fn percentage_of(amount: Decimal, percentage: Decimal, decimals: u32) -> Decimal {
    let scaled = amount
        .checked_mul(percentage)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or_default();
    round(scaled, decimals)
}

/// Full-precision sum; rounding is left to the caller. Overflow yields zero.
pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .unwrap_or_default()
}
