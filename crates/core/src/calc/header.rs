//! Header aggregator.
//!
//! Rolls the line collection into per-tier totals. Each tier sums the line
//! figures at full precision and rounds once at the end, unlike the line
//! calculator which rounds every figure it produces.

use ledgercalc_shared::{CurrencyTier, DecimalProfile};

use crate::arithmetic;
use crate::document::{HeaderTotals, LineAmount, TierTotals};

/// Aggregates `lines` into header totals.
///
/// An empty collection yields all-zero totals in every tier. With the country
/// currency off, the country tier is the local tier.
#[must_use]
pub fn aggregate_header(
    lines: &[LineAmount],
    profile: &DecimalProfile,
    country_enabled: bool,
) -> HeaderTotals {
    if lines.is_empty() {
        return HeaderTotals::ZERO;
    }

    let transaction = tier_totals(lines, CurrencyTier::Transaction, profile, country_enabled);
    let local = tier_totals(lines, CurrencyTier::Local, profile, country_enabled);
    let country = if country_enabled {
        tier_totals(lines, CurrencyTier::Country, profile, country_enabled)
    } else {
        local
    };

    HeaderTotals {
        transaction,
        local,
        country,
    }
}

fn tier_totals(
    lines: &[LineAmount],
    tier: CurrencyTier,
    profile: &DecimalProfile,
    country_enabled: bool,
) -> TierTotals {
    let amount_sum = arithmetic::sum(lines.iter().map(|line| line.taxable_in(tier)));
    let tax_sum = arithmetic::sum(lines.iter().map(|line| line.tax_in(tier)));
    TierTotals::from_sums(amount_sum, tax_sum, profile.decimals_for(tier, country_enabled))
}
