use crate::validate::{deserialize, require_object, require_string};
use journal_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_capital_size() -> f64 {
    100_000.0
}

fn default_max_daily_drawdown() -> f64 {
    5.0
}

fn default_max_overall_drawdown() -> f64 {
    10.0
}

/// A prop-firm trading account with its risk parameters. Drawdown limits
/// are percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub account_name: String,
    pub prop_firm: String,
    #[serde(default = "default_capital_size")]
    pub capital_size: f64,
    #[serde(default = "default_max_daily_drawdown")]
    pub max_daily_drawdown: f64,
    #[serde(default = "default_max_overall_drawdown")]
    pub max_overall_drawdown: f64,
}

pub fn validate_account(payload: &Value) -> Result<Account> {
    let map = require_object(payload)?;
    require_string(map, "account_name")?;
    require_string(map, "prop_firm")?;
    deserialize(payload)
}
