use crate::validate::{deserialize, require_number, require_object, require_string};
use crate::Screenshot;
use journal_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A journalled trade. `id` is assigned by the persistence layer and is
/// absent on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: String,
    pub instrument: String,
    /// `"long"` or `"short"`, interpreted case-insensitively downstream.
    /// Stored as a free string; structural validation does not constrain
    /// the value.
    pub direction: String,
    pub entry_price: f64,
    pub exit_price: f64,
    pub size: f64,
    pub account: String,
    #[serde(default)]
    pub fees: f64,
    #[serde(default)]
    pub entry_datetime: Option<String>,
    #[serde(default)]
    pub exit_datetime: Option<String>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    #[serde(default)]
    pub trade_type: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub pre_emotion: Option<String>,
    #[serde(default)]
    pub post_reflection: Option<String>,
    #[serde(default)]
    pub timeframe: Option<String>,
    #[serde(default)]
    pub risk_amount: Option<f64>,
    #[serde(default)]
    pub strategy_tag: Option<String>,
    #[serde(default)]
    pub rules_followed: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
}

pub fn validate_trade(payload: &Value) -> Result<Trade> {
    let map = require_object(payload)?;
    for field in ["date", "instrument", "direction", "account"] {
        require_string(map, field)?;
    }
    for field in ["entry_price", "exit_price", "size"] {
        require_number(map, field)?;
    }
    deserialize(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::JournalError;
    use serde_json::json;

    fn base_payload() -> Value {
        json!({
            "date": "2024-03-04",
            "instrument": "EURUSD",
            "direction": "long",
            "entry_price": 1.0850,
            "exit_price": 1.0920,
            "size": 10000,
            "account": "FTMO-1"
        })
    }

    #[test]
    fn test_minimal_trade_fills_defaults() {
        let trade = validate_trade(&base_payload()).unwrap();
        assert!(trade.id.is_none());
        assert_eq!(trade.fees, 0.0);
        assert!(trade.rules_followed.is_empty());
        assert!(trade.screenshots.is_empty());
        assert!(trade.stop_loss.is_none());
    }

    #[test]
    fn test_missing_entry_price_names_the_field() {
        let mut payload = base_payload();
        payload.as_object_mut().unwrap().remove("entry_price");
        let err = validate_trade(&payload).unwrap_err();
        match err {
            JournalError::Validation { field, .. } => assert_eq!(field, "entry_price"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_size_is_rejected() {
        let mut payload = base_payload();
        payload["size"] = json!("ten thousand");
        let err = validate_trade(&payload).unwrap_err();
        match err {
            JournalError::Validation { field, .. } => assert_eq!(field, "size"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_annotations_and_screenshots_pass_through() {
        let mut payload = base_payload();
        payload["strategy_tag"] = json!("breakout");
        payload["rules_followed"] = json!(["waited for close", "risk under 1%"]);
        payload["screenshots"] = json!([
            {"label": "entry", "screenshot_url": "https://img.example/1.png"}
        ]);

        let trade = validate_trade(&payload).unwrap();
        assert_eq!(trade.strategy_tag.as_deref(), Some("breakout"));
        assert_eq!(trade.rules_followed.len(), 2);
        assert_eq!(trade.screenshots[0].label, "entry");
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(validate_trade(&json!(["not", "an", "object"])).is_err());
    }
}
