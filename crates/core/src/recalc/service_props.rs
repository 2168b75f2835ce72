//! Property-based tests for the recalculation orchestrator.

use ledgercalc_shared::{CurrencyTier, DecimalProfile};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Recalculator;
use super::trigger::{LineChange, RecalcOutcome, SkipReason};
use crate::calc::aggregate_header;
use crate::currency::ExchangeContext;
use crate::document::{Document, DocumentKind, LineAmount};

/// Strategy to generate unrounded document amounts (0.0000 to 100,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate exchange rates (0.000001 to 1,000.000000).
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate zero or negative rates.
fn degenerate_rate() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=0i64).prop_map(|v| Decimal::new(v, 6))
}

fn document() -> impl Strategy<Value = Document> {
    (
        rate(),
        rate(),
        any::<bool>(),
        prop::collection::vec((amount(), amount()), 0..12),
    )
        .prop_map(|(transaction_rate, country_rate, enabled, pairs)| {
            let exchange = ExchangeContext {
                transaction_rate,
                country_rate,
                country_currency_enabled: enabled,
            };
            let recalc = Recalculator::new(DecimalProfile::default());
            let mut doc = Document::new(DocumentKind::ApInvoice, exchange);
            for (taxable, tax) in pairs {
                recalc.add_line(&mut doc, LineAmount::new(0, taxable, tax));
            }
            doc
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A zero or negative rate never changes anything.
    #[test]
    fn prop_degenerate_rate_is_noop(doc in document(), bad in degenerate_rate()) {
        let recalc = Recalculator::new(DecimalProfile::default());
        let mut after = doc.clone();
        let outcome = recalc.on_exchange_rate_changed(&mut after, bad, None);
        prop_assert_eq!(outcome, RecalcOutcome::Skipped { reason: SkipReason::NonPositiveRate });
        prop_assert_eq!(after, doc);
    }

    /// After any applied trigger the header matches a fresh aggregation.
    #[test]
    fn prop_header_consistent_after_rate_change(doc in document(), new_rate in rate()) {
        let recalc = Recalculator::new(DecimalProfile::default());
        let mut doc = doc;
        recalc.on_exchange_rate_changed(&mut doc, new_rate, None);
        let enabled = doc.exchange.country_currency_enabled;
        prop_assert_eq!(doc.totals, aggregate_header(&doc.lines, recalc.profile(), enabled));
        for tier in CurrencyTier::ALL {
            let dp = recalc.profile().decimals_for(tier, enabled);
            prop_assert!(doc.totals.tier(tier).is_consistent(dp));
        }
    }

    /// Lines added through the orchestrator keep every tier within one unit
    /// of its per-line rounded sum.
    #[test]
    fn prop_added_lines_keep_drift_within_one_unit(doc in document()) {
        let recalc = Recalculator::new(DecimalProfile::default());
        let enabled = doc.exchange.country_currency_enabled;
        let drift = doc.totals.drift(&doc.lines, recalc.profile(), enabled);
        prop_assert!(drift.within_one_unit(recalc.profile(), enabled));
    }

    /// Line numbers stay unique whatever numbers the caller supplies.
    #[test]
    fn prop_line_numbers_stay_unique(
        doc in document(),
        requested in prop::collection::vec(0u32..6, 1..8),
    ) {
        let recalc = Recalculator::new(DecimalProfile::default());
        let mut doc = doc;
        for line_no in requested {
            recalc.add_line(&mut doc, LineAmount::new(line_no, Decimal::ONE, Decimal::ZERO));
        }
        let mut numbers: Vec<u32> = doc.lines.iter().map(|line| line.line_no).collect();
        let count = numbers.len();
        numbers.sort_unstable();
        numbers.dedup();
        prop_assert_eq!(numbers.len(), count);
    }

    /// Applying the same rate twice gives the same document.
    #[test]
    fn prop_rate_change_is_idempotent(doc in document(), new_rate in rate()) {
        let recalc = Recalculator::new(DecimalProfile::default());
        let mut once = doc;
        recalc.on_exchange_rate_changed(&mut once, new_rate, None);
        let mut twice = once.clone();
        recalc.on_exchange_rate_changed(&mut twice, new_rate, None);
        prop_assert_eq!(once, twice);
    }

    /// Removing every line, one by one, ends with all-zero totals.
    #[test]
    fn prop_removing_all_lines_resets_header(doc in document()) {
        let recalc = Recalculator::new(DecimalProfile::default());
        let mut doc = doc;
        let numbers: Vec<u32> = doc.lines.iter().map(|line| line.line_no).collect();
        for line_no in numbers {
            prop_assert!(recalc.remove_line(&mut doc, line_no).is_applied());
        }
        prop_assert!(doc.totals.is_zero());
    }

    /// Hiding the tax field leaves no tax anywhere on the document.
    #[test]
    fn prop_hidden_tax_is_zero_everywhere(doc in document()) {
        let recalc = Recalculator::new(DecimalProfile::default());
        let mut doc = doc;
        recalc.on_visibility_changed(&mut doc, false);
        recalc.on_line_changed(&mut doc, LineChange::Deleted);
        for line in &doc.lines {
            prop_assert_eq!(line.local_tax_amount, Decimal::ZERO);
            prop_assert_eq!(line.country_tax_amount, Decimal::ZERO);
        }
        for tier in CurrencyTier::ALL {
            prop_assert_eq!(doc.totals.tier(tier).total_tax_amount, Decimal::ZERO);
        }
    }
}
