//! Document line amounts.

use ledgercalc_shared::CurrencyTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sanitize::{lenient_decimal, lenient_opt_decimal};

/// Amounts carried by one document line.
///
/// `taxable_amount` and `tax_amount` are in the document currency. The tax
/// amount is authoritative once set: converting it into other tiers reuses
/// it as-is and never re-derives it from `tax_percentage`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineAmount {
    /// Stable line / item number within the document.
    #[serde(default)]
    pub line_no: u32,
    /// Quantity, for documents priced per unit.
    #[serde(default, deserialize_with = "lenient_opt_decimal")]
    pub quantity: Option<Decimal>,
    /// Unit price, for documents priced per unit.
    #[serde(default, deserialize_with = "lenient_opt_decimal")]
    pub unit_price: Option<Decimal>,
    /// Base amount before tax, document currency.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub taxable_amount: Decimal,
    /// Tax rate in percent.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub tax_percentage: Decimal,
    /// Tax amount, document currency.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub tax_amount: Decimal,
    /// Base amount, local currency.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub local_taxable_amount: Decimal,
    /// Tax amount, local currency.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub local_tax_amount: Decimal,
    /// Base amount, country currency.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub country_taxable_amount: Decimal,
    /// Tax amount, country currency.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub country_tax_amount: Decimal,
}

impl LineAmount {
    /// Creates a line from its document-currency figures.
    #[must_use]
    pub fn new(line_no: u32, taxable_amount: Decimal, tax_amount: Decimal) -> Self {
        Self {
            line_no,
            taxable_amount,
            tax_amount,
            ..Self::default()
        }
    }

    /// Sets the tax percentage.
    #[must_use]
    pub fn with_tax_percentage(mut self, tax_percentage: Decimal) -> Self {
        self.tax_percentage = tax_percentage;
        self
    }

    /// Taxable amount in `tier`.
    #[must_use]
    pub const fn taxable_in(&self, tier: CurrencyTier) -> Decimal {
        match tier {
            CurrencyTier::Transaction => self.taxable_amount,
            CurrencyTier::Local => self.local_taxable_amount,
            CurrencyTier::Country => self.country_taxable_amount,
        }
    }

    /// Tax amount in `tier`.
    #[must_use]
    pub const fn tax_in(&self, tier: CurrencyTier) -> Decimal {
        match tier {
            CurrencyTier::Transaction => self.tax_amount,
            CurrencyTier::Local => self.local_tax_amount,
            CurrencyTier::Country => self.country_tax_amount,
        }
    }

    /// Zeroes every tax figure, used while the tax field is hidden.
    pub fn clear_tax(&mut self) {
        self.tax_amount = Decimal::ZERO;
        self.local_tax_amount = Decimal::ZERO;
        self.country_tax_amount = Decimal::ZERO;
    }
}

/// A user edit of one raw line field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum LineEdit {
    /// New quantity; recomputes the taxable amount when a price is present.
    #[serde(deserialize_with = "lenient_decimal")]
    Quantity(Decimal),
    /// New unit price; recomputes the taxable amount when a quantity is present.
    #[serde(deserialize_with = "lenient_decimal")]
    UnitPrice(Decimal),
    /// New taxable amount entered directly.
    #[serde(deserialize_with = "lenient_decimal")]
    TaxableAmount(Decimal),
    /// New tax percentage; re-derives the tax amount.
    #[serde(deserialize_with = "lenient_decimal")]
    TaxPercentage(Decimal),
    /// Tax amount typed by the user; kept verbatim.
    #[serde(deserialize_with = "lenient_decimal")]
    TaxAmount(Decimal),
}
