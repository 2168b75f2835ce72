//! Exchange-rate context for a document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic;
use crate::sanitize::lenient_decimal;

/// Exchange rates in force for one document.
///
/// When the country currency is switched off, country-tier figures are a copy
/// of the local tier and `country_rate` is kept equal to `transaction_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExchangeContext {
    /// Document currency to local currency (1 document unit = rate local units).
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub transaction_rate: Decimal,
    /// Document currency to country (reporting) currency.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub country_rate: Decimal,
    /// Whether country-tier figures are computed independently.
    #[serde(default)]
    pub country_currency_enabled: bool,
}

impl ExchangeContext {
    /// Creates a context with an independent country rate.
    #[must_use]
    pub const fn new(transaction_rate: Decimal, country_rate: Decimal) -> Self {
        Self {
            transaction_rate,
            country_rate,
            country_currency_enabled: true,
        }
    }

    /// Creates a context without a country currency; the country rate tracks
    /// the transaction rate.
    #[must_use]
    pub const fn local_only(transaction_rate: Decimal) -> Self {
        Self {
            transaction_rate,
            country_rate: transaction_rate,
            country_currency_enabled: false,
        }
    }

    /// Returns true once the document has a usable (positive) transaction rate.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.transaction_rate > Decimal::ZERO
    }

    /// Returns a copy with both rates rounded to `decimals` places and the
    /// country rate synchronised when the country currency is off.
    #[must_use]
    pub fn normalized(&self, decimals: u32) -> Self {
        let transaction_rate = arithmetic::round(self.transaction_rate, decimals);
        let country_rate = if self.country_currency_enabled {
            arithmetic::round(self.country_rate, decimals)
        } else {
            transaction_rate
        };

        Self {
            transaction_rate,
            country_rate,
            country_currency_enabled: self.country_currency_enabled,
        }
    }
}
