pub mod model;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default endpoint root of the market-data provider.
pub const DEFAULT_BASE_URL: &str = "https://marketdata.tradermade.com/api/v1";

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("API key not configured")]
    ApiKeyMissing,

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation failed on field '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDataConfig {
    /// Authenticates requests against the provider. Absence is not a
    /// startup error: network-dependent operations refuse with
    /// `ApiKeyMissing` instead.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}
