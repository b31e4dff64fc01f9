use config::{Config, Environment, File};
use journal_core::{JournalError, MarketDataConfig, Result};
use std::path::Path;
use tracing::{info, warn};

/// Prefix for environment-sourced settings, e.g. `TRADING_JOURNAL_API_KEY`
/// and `TRADING_JOURNAL_BASE_URL`.
pub const ENV_PREFIX: &str = "TRADING_JOURNAL";

pub struct ConfigManager {
    market_data: MarketDataConfig,
}

impl ConfigManager {
    /// Loads settings from a YAML file, with environment variables layered
    /// on top.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| JournalError::Configuration(e.to_string()))?;
        Self::from_config(config)
    }

    /// Loads settings from the environment alone. This is the production
    /// path for the provider API key.
    pub fn from_env() -> Result<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| JournalError::Configuration(e.to_string()))?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let market_data: MarketDataConfig = config
            .try_deserialize()
            .map_err(|e| JournalError::Configuration(e.to_string()))?;

        info!("Configuration loaded");

        Ok(Self { market_data })
    }

    pub fn market_data(&self) -> &MarketDataConfig {
        &self.market_data
    }

    /// A missing API key is not a startup error: network-dependent
    /// operations degrade to `ApiKeyMissing` instead.
    pub fn validate(&self) -> Result<()> {
        if self.market_data.base_url.is_empty() {
            return Err(JournalError::Configuration(
                "Market data base URL not configured".to_string(),
            ));
        }

        if self.market_data.api_key.is_none() {
            warn!("No market data API key configured; live lookups will be refused");
        }

        Ok(())
    }
}
