use crate::validate::{deserialize, require_object, require_string};
use journal_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-text journal note for a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: String,
    pub content: String,
}

pub fn validate_note(payload: &Value) -> Result<Note> {
    let map = require_object(payload)?;
    require_string(map, "date")?;
    require_string(map, "content")?;
    deserialize(payload)
}
