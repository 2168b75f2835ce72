//! Shared types, errors, and configuration for Ledgercalc.
//!
//! This crate provides common types used across all other crates:
//! - Decimal precision profile and currency tiers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogConfig};
pub use error::{AppError, AppResult};
pub use types::{CurrencyTier, DecimalProfile, ProfileError};
