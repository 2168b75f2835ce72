//! Common types used across the workspace.

pub mod precision;

pub use precision::{CurrencyTier, DecimalProfile, ProfileError};
