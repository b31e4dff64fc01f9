use journal_core::{JournalError, Result};
use serde_json::{Map, Value};

pub(crate) fn missing(field: &str) -> JournalError {
    JournalError::Validation {
        field: field.to_string(),
        reason: "required field is missing".to_string(),
    }
}

pub(crate) fn wrong_shape(field: &str, expected: &str) -> JournalError {
    JournalError::Validation {
        field: field.to_string(),
        reason: format!("expected {}", expected),
    }
}

pub(crate) fn require_object(payload: &Value) -> Result<&Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| wrong_shape("payload", "a JSON object"))
}

pub(crate) fn require_string(map: &Map<String, Value>, field: &str) -> Result<()> {
    match map.get(field) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(wrong_shape(field, "a string")),
        None => Err(missing(field)),
    }
}

pub(crate) fn require_number(map: &Map<String, Value>, field: &str) -> Result<()> {
    match map.get(field) {
        Some(Value::Number(_)) => Ok(()),
        Some(_) => Err(wrong_shape(field, "a number")),
        None => Err(missing(field)),
    }
}

pub(crate) fn require_string_list(map: &Map<String, Value>, field: &str) -> Result<()> {
    match map.get(field) {
        Some(Value::Array(items)) => {
            if items.iter().all(Value::is_string) {
                Ok(())
            } else {
                Err(wrong_shape(field, "a list of strings"))
            }
        }
        Some(_) => Err(wrong_shape(field, "a list of strings")),
        None => Err(missing(field)),
    }
}

/// Final deserialization step after the explicit required-field checks.
/// Shape errors in optional fields surface here with serde's own message.
pub(crate) fn deserialize<T: serde::de::DeserializeOwned>(payload: &Value) -> Result<T> {
    serde_json::from_value(payload.clone()).map_err(|e| JournalError::Validation {
        field: "payload".to_string(),
        reason: e.to_string(),
    })
}
