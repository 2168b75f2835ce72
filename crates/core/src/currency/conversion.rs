//! Currency conversion logic.
//!
//! Rounding strategy for multi-currency:
//! - Always round to the target tier's decimal places
//! - Round half away from zero, once per converted figure
//! - Keep the transaction-currency figure untouched next to the converted one

use rust_decimal::Decimal;

use crate::arithmetic;

/// Converts an amount into another currency tier using the given exchange rate.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Decimal {
    arithmetic::multiply(amount, rate, decimal_places)
}
