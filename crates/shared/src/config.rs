//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::CurrencyCode;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Currency selected when none is given on the command line.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_log_filter() -> String {
    "kurs=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KURS").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses the configured default currency code.
    pub fn default_code(&self) -> AppResult<CurrencyCode> {
        self.default_currency
            .parse()
            .map_err(|_| AppError::Config(format!("invalid default_currency: {}", self.default_currency)))
    }
}
