//! Line amount calculator.
//!
//! Converts a line's document-currency figures into the local and country
//! tiers, rounding once per figure. The tax amount already on the line is the
//! one converted; the tax percentage is only consulted when the user edits a
//! raw field ([`apply_edit`]).

use ledgercalc_shared::DecimalProfile;
use rust_decimal::Decimal;

use crate::arithmetic;
use crate::currency::{ExchangeContext, convert_amount};
use crate::document::{LineAmount, LineEdit};

/// Recomputes the local and country figures of `line`, returning the updated line.
///
/// Idempotent: calling it again with the same inputs yields the same line.
/// Non-positive rates are not screened here; the orchestrator decides when a
/// recompute is skipped.
#[must_use]
pub fn recalculate_line(
    line: &LineAmount,
    exchange: &ExchangeContext,
    profile: &DecimalProfile,
) -> LineAmount {
    let mut updated = line.clone();
    recalculate_line_in_place(&mut updated, exchange, profile);
    updated
}

/// In-place form of [`recalculate_line`].
pub fn recalculate_line_in_place(
    line: &mut LineAmount,
    exchange: &ExchangeContext,
    profile: &DecimalProfile,
) {
    let rate = exchange.transaction_rate;
    line.local_taxable_amount =
        convert_amount(line.taxable_amount, rate, profile.local_amount_decimals);
    line.local_tax_amount = convert_amount(line.tax_amount, rate, profile.local_amount_decimals);

    if exchange.country_currency_enabled {
        let country_rate = exchange.country_rate;
        line.country_taxable_amount = convert_amount(
            line.taxable_amount,
            country_rate,
            profile.country_amount_decimals,
        );
        line.country_tax_amount =
            convert_amount(line.tax_amount, country_rate, profile.country_amount_decimals);
    } else {
        line.country_taxable_amount = line.local_taxable_amount;
        line.country_tax_amount = line.local_tax_amount;
    }
}

/// Rounds the document-currency entry figures of `line` to their precisions.
///
/// Applied when a line enters a document so that every stored transaction
/// figure already sits at amount precision, like an edited one.
pub fn round_entry(line: &mut LineAmount, profile: &DecimalProfile) {
    line.quantity = line
        .quantity
        .map(|quantity| arithmetic::round(quantity, profile.quantity_decimals));
    line.unit_price = line
        .unit_price
        .map(|price| arithmetic::round(price, profile.price_decimals));
    line.taxable_amount = arithmetic::round(line.taxable_amount, profile.amount_decimals);
    line.tax_amount = arithmetic::round(line.tax_amount, profile.amount_decimals);
}

/// Applies a raw field edit to the document-currency figures of `line`.
///
/// Quantity, price, taxable amount and percentage edits re-derive the tax
/// amount from the percentage. A typed tax amount is stored verbatim (rounded
/// to amount precision) and leaves the percentage alone. Tier figures are not
/// touched; run [`recalculate_line_in_place`] afterwards.
pub fn apply_edit(line: &mut LineAmount, edit: LineEdit, profile: &DecimalProfile) {
    match edit {
        LineEdit::Quantity(quantity) => {
            line.quantity = Some(arithmetic::round(quantity, profile.quantity_decimals));
            refresh_extended_amount(line, profile);
            derive_tax(line, profile);
        }
        LineEdit::UnitPrice(price) => {
            line.unit_price = Some(arithmetic::round(price, profile.price_decimals));
            refresh_extended_amount(line, profile);
            derive_tax(line, profile);
        }
        LineEdit::TaxableAmount(amount) => {
            line.taxable_amount = arithmetic::round(amount, profile.amount_decimals);
            derive_tax(line, profile);
        }
        LineEdit::TaxPercentage(percentage) => {
            line.tax_percentage = percentage;
            derive_tax(line, profile);
        }
        LineEdit::TaxAmount(amount) => {
            line.tax_amount = arithmetic::round(amount, profile.amount_decimals);
        }
    }
}

/// `taxable = quantity * unit price` once both are known.
fn refresh_extended_amount(line: &mut LineAmount, profile: &DecimalProfile) {
    if let (Some(quantity), Some(price)) = (line.quantity, line.unit_price) {
        line.taxable_amount = arithmetic::multiply(quantity, price, profile.amount_decimals);
    }
}

fn derive_tax(line: &mut LineAmount, profile: &DecimalProfile) {
    line.tax_amount = if line.tax_percentage.is_zero() {
        Decimal::ZERO
    } else {
        arithmetic::percentage_of(line.taxable_amount, line.tax_percentage, profile.amount_decimals)
    };
}
