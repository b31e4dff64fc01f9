use crate::validate::{deserialize, require_object, require_string, require_string_list};
use journal_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named strategy with its ordered rule checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub strategy_name: String,
    pub rules: Vec<String>,
}

pub fn validate_strategy(payload: &Value) -> Result<Strategy> {
    let map = require_object(payload)?;
    require_string(map, "strategy_name")?;
    require_string_list(map, "rules")?;
    deserialize(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::JournalError;
    use serde_json::json;

    #[test]
    fn test_rule_order_is_preserved() {
        let strategy = validate_strategy(&json!({
            "strategy_name": "London breakout",
            "rules": ["mark the range", "wait for sweep", "enter on close"]
        }))
        .unwrap();
        assert_eq!(strategy.rules[0], "mark the range");
        assert_eq!(strategy.rules[2], "enter on close");
    }

    #[test]
    fn test_rules_must_be_strings() {
        let err = validate_strategy(&json!({
            "strategy_name": "London breakout",
            "rules": ["mark the range", 7]
        }))
        .unwrap_err();
        match err {
            JournalError::Validation { field, .. } => assert_eq!(field, "rules"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
