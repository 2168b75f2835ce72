//! Decimal precision profile and currency tiers.
//!
//! A tenant configures how many decimal places each kind of figure carries.
//! The profile is loaded once per session and handed to every calculation
//! explicitly; nothing in the engine reads it from ambient state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest scale a `Decimal` can represent.
pub const MAX_DECIMALS: u32 = 28;

/// Default precision for amounts, quantities and prices.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Default precision for exchange rates.
pub const DEFAULT_EXCHANGE_RATE_DECIMALS: u32 = 6;

/// One of the three currency contexts a document amount can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyTier {
    /// The document (transaction) currency.
    Transaction,
    /// The tenant's local / functional currency.
    Local,
    /// The optional country / reporting currency.
    Country,
}

impl CurrencyTier {
    /// All tiers, in aggregation order.
    pub const ALL: [Self; 3] = [Self::Transaction, Self::Local, Self::Country];
}

impl std::fmt::Display for CurrencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transaction => write!(f, "transaction"),
            Self::Local => write!(f, "local"),
            Self::Country => write!(f, "country"),
        }
    }
}

/// Errors raised when a precision profile cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// A precision exceeds what `Decimal` can hold.
    #[error("{field} precision {value} exceeds the maximum of {max}", max = MAX_DECIMALS)]
    PrecisionTooLarge {
        /// The offending profile field.
        field: &'static str,
        /// The configured value.
        value: u32,
    },
}

/// Per-tenant rounding settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimalProfile {
    /// Transaction-currency amounts.
    pub amount_decimals: u32,
    /// Local-currency amounts.
    pub local_amount_decimals: u32,
    /// Country-currency amounts.
    pub country_amount_decimals: u32,
    /// Line quantities.
    pub quantity_decimals: u32,
    /// Unit prices.
    pub price_decimals: u32,
    /// Exchange rates.
    pub exchange_rate_decimals: u32,
}

impl Default for DecimalProfile {
    fn default() -> Self {
        Self {
            amount_decimals: DEFAULT_DECIMALS,
            local_amount_decimals: DEFAULT_DECIMALS,
            country_amount_decimals: DEFAULT_DECIMALS,
            quantity_decimals: DEFAULT_DECIMALS,
            price_decimals: DEFAULT_DECIMALS,
            exchange_rate_decimals: DEFAULT_EXCHANGE_RATE_DECIMALS,
        }
    }
}

impl DecimalProfile {
    /// Creates a profile using one precision for every amount tier.
    ///
    /// Quantity, price and exchange-rate precisions keep their defaults.
    #[must_use]
    pub fn with_amount_decimals(decimals: u32) -> Self {
        Self {
            amount_decimals: decimals,
            local_amount_decimals: decimals,
            country_amount_decimals: decimals,
            ..Self::default()
        }
    }

    /// Precision used for amounts in `tier`.
    ///
    /// With the country currency switched off the country tier only ever
    /// mirrors the local tier, so it is rounded with the local precision.
    #[must_use]
    pub const fn decimals_for(&self, tier: CurrencyTier, country_enabled: bool) -> u32 {
        match tier {
            CurrencyTier::Transaction => self.amount_decimals,
            CurrencyTier::Local => self.local_amount_decimals,
            CurrencyTier::Country if country_enabled => self.country_amount_decimals,
            CurrencyTier::Country => self.local_amount_decimals,
        }
    }

    /// Smallest representable step for amounts in `tier`, e.g. `0.01` at two decimals.
    #[must_use]
    pub fn unit_for(&self, tier: CurrencyTier, country_enabled: bool) -> Decimal {
        Decimal::new(1, self.decimals_for(tier, country_enabled).min(MAX_DECIMALS))
    }

    /// Checks every precision fits within a `Decimal` scale.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fields = [
            ("amount_decimals", self.amount_decimals),
            ("local_amount_decimals", self.local_amount_decimals),
            ("country_amount_decimals", self.country_amount_decimals),
            ("quantity_decimals", self.quantity_decimals),
            ("price_decimals", self.price_decimals),
            ("exchange_rate_decimals", self.exchange_rate_decimals),
        ];

        match fields.into_iter().find(|(_, value)| *value > MAX_DECIMALS) {
            Some((field, value)) => Err(ProfileError::PrecisionTooLarge { field, value }),
            None => Ok(()),
        }
    }
}
