use crate::validate::{deserialize, require_object, require_string};
use crate::Screenshot;
use journal_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasPoint {
    pub bias_type: String,
    pub point: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasArgument {
    pub direction: String,
    pub reason: String,
}

/// Weekly directional bias for one pair: expectation notes plus the points
/// and arguments backing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyBias {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub week_start_date: String,
    pub week_end_date: String,
    pub pair: String,
    #[serde(default)]
    pub expecting_notes: Option<String>,
    #[serde(default)]
    pub not_expecting_notes: Option<String>,
    #[serde(default)]
    pub bias_points: Vec<BiasPoint>,
    #[serde(default)]
    pub arguments: Vec<BiasArgument>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
}

pub fn validate_weekly_bias(payload: &Value) -> Result<WeeklyBias> {
    let map = require_object(payload)?;
    for field in ["week_start_date", "week_end_date", "pair"] {
        require_string(map, field)?;
    }
    deserialize(payload)
}
