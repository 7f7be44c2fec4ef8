//! Register configuration

use std::time::Duration;

use clap::Args;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The currency code is not an ISO 4217 code known to the register.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// How to reach the back-office API.
#[derive(Debug, Clone, Args)]
pub struct RegisterConfig {
    /// Base URL of the back-office API
    #[arg(long, env = "TILL_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Bearer token issued with `till-app token create`
    #[arg(long, env = "TILL_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// ISO 4217 code prices are held in
    #[arg(long, env = "TILL_CURRENCY", default_value = "PHP")]
    pub currency: String,

    /// Per-request timeout in seconds; requests never time out when unset
    #[arg(long = "timeout", env = "TILL_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,
}

impl RegisterConfig {
    /// Resolves the configured currency code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] for codes `rusty_money` does not know.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        let code = self.currency.trim().to_ascii_uppercase();

        iso::find(&code).ok_or(ConfigError::UnknownCurrency(code))
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
