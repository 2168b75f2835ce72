//! Property-based tests for the line amount calculator.

use ledgercalc_shared::DecimalProfile;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::line::{apply_edit, recalculate_line};
use crate::arithmetic;
use crate::currency::ExchangeContext;
use crate::document::{LineAmount, LineEdit};

/// Strategy to generate document amounts (-100,000.0000 to 100,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate exchange rates (0.000001 to 50,000.000000).
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..50_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate tax percentages (0.00 to 100.00).
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate a precision profile with amount tiers between 0 and 4 places.
fn profile() -> impl Strategy<Value = DecimalProfile> {
    (0u32..=4, 0u32..=4, 0u32..=4).prop_map(|(amount, local, country)| DecimalProfile {
        amount_decimals: amount,
        local_amount_decimals: local,
        country_amount_decimals: country,
        ..DecimalProfile::default()
    })
}

fn exchange() -> impl Strategy<Value = ExchangeContext> {
    (rate(), rate(), any::<bool>()).prop_map(|(transaction_rate, country_rate, enabled)| {
        ExchangeContext {
            transaction_rate,
            country_rate,
            country_currency_enabled: enabled,
        }
    })
}

fn line() -> impl Strategy<Value = LineAmount> {
    (amount(), amount(), percentage()).prop_map(|(taxable, tax, pct)| {
        LineAmount::new(1, taxable, tax).with_tax_percentage(pct)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Recalculating twice with unchanged inputs yields identical output.
    #[test]
    fn prop_recalculate_is_idempotent(
        line in line(),
        exchange in exchange(),
        profile in profile(),
    ) {
        let once = recalculate_line(&line, &exchange, &profile);
        let twice = recalculate_line(&once, &exchange, &profile);
        prop_assert_eq!(once, twice);
    }

    /// With the country currency off, country figures equal local figures.
    #[test]
    fn prop_country_mirrors_local_when_disabled(
        line in line(),
        rate in rate(),
        stale_country_rate in rate(),
        profile in profile(),
    ) {
        let exchange = ExchangeContext {
            transaction_rate: rate,
            country_rate: stale_country_rate,
            country_currency_enabled: false,
        };
        let updated = recalculate_line(&line, &exchange, &profile);
        prop_assert_eq!(updated.country_taxable_amount, updated.local_taxable_amount);
        prop_assert_eq!(updated.country_tax_amount, updated.local_tax_amount);
    }

    /// The stored tax amount is converted as-is, whatever the percentage says.
    #[test]
    fn prop_tax_amount_never_rederived(
        line in line(),
        exchange in exchange(),
        profile in profile(),
    ) {
        let updated = recalculate_line(&line, &exchange, &profile);
        prop_assert_eq!(updated.tax_amount, line.tax_amount);
        prop_assert_eq!(updated.tax_percentage, line.tax_percentage);
        prop_assert_eq!(
            updated.local_tax_amount,
            arithmetic::multiply(
                line.tax_amount,
                exchange.transaction_rate,
                profile.local_amount_decimals
            )
        );
    }

    /// Local figures never carry more places than the local precision.
    #[test]
    fn prop_local_figures_respect_precision(
        line in line(),
        exchange in exchange(),
        profile in profile(),
    ) {
        let updated = recalculate_line(&line, &exchange, &profile);
        prop_assert!(updated.local_taxable_amount.scale() <= profile.local_amount_decimals);
        prop_assert!(updated.local_tax_amount.scale() <= profile.local_amount_decimals);
    }

    /// A typed tax amount survives a subsequent currency recompute.
    #[test]
    fn prop_manual_tax_survives_recompute(
        line in line(),
        typed in amount(),
        exchange in exchange(),
        profile in profile(),
    ) {
        let mut edited = line;
        apply_edit(&mut edited, LineEdit::TaxAmount(typed), &profile);
        let updated = recalculate_line(&edited, &exchange, &profile);
        prop_assert_eq!(updated.tax_amount, arithmetic::round(typed, profile.amount_decimals));
    }
}
