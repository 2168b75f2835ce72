//! Header totals per currency tier.

use ledgercalc_shared::{CurrencyTier, DecimalProfile};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::LineAmount;
use crate::arithmetic;

/// Totals for one currency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierTotals {
    /// Sum of taxable amounts.
    pub total_amount: Decimal,
    /// Sum of tax amounts.
    pub total_tax_amount: Decimal,
    /// `total_amount + total_tax_amount`.
    pub total_amount_after_tax: Decimal,
}

impl TierTotals {
    /// All-zero totals.
    pub const ZERO: Self = Self {
        total_amount: Decimal::ZERO,
        total_tax_amount: Decimal::ZERO,
        total_amount_after_tax: Decimal::ZERO,
    };

    /// Builds totals from full-precision sums, rounding each figure once.
    #[must_use]
    pub fn from_sums(amount_sum: Decimal, tax_sum: Decimal, decimals: u32) -> Self {
        let total_amount = arithmetic::round(amount_sum, decimals);
        let total_tax_amount = arithmetic::round(tax_sum, decimals);
        Self {
            total_amount,
            total_tax_amount,
            total_amount_after_tax: arithmetic::add(total_amount, total_tax_amount, decimals),
        }
    }

    /// Returns true when `after tax == round(amount + tax)` at `decimals`.
    #[must_use]
    pub fn is_consistent(&self, decimals: u32) -> bool {
        self.total_amount_after_tax
            == arithmetic::add(self.total_amount, self.total_tax_amount, decimals)
    }
}

/// Header-level totals in every currency tier.
///
/// Always a pure function of the line collection; never a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderTotals {
    /// Document currency.
    #[serde(default)]
    pub transaction: TierTotals,
    /// Local currency.
    #[serde(default)]
    pub local: TierTotals,
    /// Country currency.
    #[serde(default)]
    pub country: TierTotals,
}

impl HeaderTotals {
    /// Totals with every field of every tier set to zero.
    pub const ZERO: Self = Self {
        transaction: TierTotals::ZERO,
        local: TierTotals::ZERO,
        country: TierTotals::ZERO,
    };

    /// Totals for `tier`.
    #[must_use]
    pub const fn tier(&self, tier: CurrencyTier) -> &TierTotals {
        match tier {
            CurrencyTier::Transaction => &self.transaction,
            CurrencyTier::Local => &self.local,
            CurrencyTier::Country => &self.country,
        }
    }

    /// Returns true when every field of every tier is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Measures how far these totals sit from the sum of line amounts rounded
    /// line by line.
    ///
    /// The header rounds the raw sum once per tier, so the two paths may
    /// disagree by rounding residue; callers assert that residue stays within
    /// one unit of the tier precision.
    #[must_use]
    pub fn drift(
        &self,
        lines: &[LineAmount],
        profile: &DecimalProfile,
        country_enabled: bool,
    ) -> HeaderDrift {
        let tier_drift = |tier: CurrencyTier| {
            let decimals = profile.decimals_for(tier, country_enabled);
            let rounded = |value| arithmetic::round(value, decimals);
            let rounded_amounts = arithmetic::sum(lines.iter().map(|l| rounded(l.taxable_in(tier))));
            let rounded_taxes = arithmetic::sum(lines.iter().map(|l| rounded(l.tax_in(tier))));
            let totals = self.tier(tier);
            TierDrift {
                amount: totals
                    .total_amount
                    .checked_sub(rounded_amounts)
                    .unwrap_or_default(),
                tax: totals
                    .total_tax_amount
                    .checked_sub(rounded_taxes)
                    .unwrap_or_default(),
            }
        };

        HeaderDrift {
            transaction: tier_drift(CurrencyTier::Transaction),
            local: tier_drift(CurrencyTier::Local),
            country: tier_drift(if country_enabled {
                CurrencyTier::Country
            } else {
                CurrencyTier::Local
            }),
        }
    }
}

/// Rounding residue for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TierDrift {
    /// Header total amount minus the sum of per-line rounded amounts.
    pub amount: Decimal,
    /// Header total tax minus the sum of per-line rounded tax amounts.
    pub tax: Decimal,
}

impl TierDrift {
    /// Largest absolute residue.
    #[must_use]
    pub fn max_abs(&self) -> Decimal {
        self.amount.abs().max(self.tax.abs())
    }
}

/// Rounding residue for every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderDrift {
    /// Document currency.
    pub transaction: TierDrift,
    /// Local currency.
    pub local: TierDrift,
    /// Country currency.
    pub country: TierDrift,
}

impl HeaderDrift {
    /// Returns true when no tier drifts by more than one unit of its precision.
    #[must_use]
    pub fn within_one_unit(&self, profile: &DecimalProfile, country_enabled: bool) -> bool {
        [
            (CurrencyTier::Transaction, self.transaction),
            (CurrencyTier::Local, self.local),
            (CurrencyTier::Country, self.country),
        ]
        .iter()
        .all(|(tier, drift)| drift.max_abs() <= profile.unit_for(*tier, country_enabled))
    }
}
