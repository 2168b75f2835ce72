//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::DecimalProfile;

/// Environment variable prefix, e.g. `LEDGERCALC__DECIMALS__AMOUNT_DECIMALS`.
pub const ENV_PREFIX: &str = "LEDGERCALC";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tenant rounding settings.
    pub decimals: DecimalProfile,
    /// Logging configuration.
    pub log: LogConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "ledgercalc=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the decimal
    /// profile is out of range.
    pub fn load() -> AppResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, reading `file` in place of `config/default` when given.
    ///
    /// Layers, lowest priority first: the config file, `config/{RUN_MODE}`,
    /// then `LEDGERCALC__*` environment variables.
    pub fn load_from(file: Option<&Path>) -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let base = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config/default").required(false),
        };

        let config = config::Config::builder()
            .add_source(base)
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.decimals.validate()?;
        Ok(loaded)
    }
}
