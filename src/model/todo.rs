//! The todo item value type and its document mapping.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::constants::{
    FIELD_CREATED_AT, FIELD_DESCRIPTION, FIELD_IS_COMPLETED, FIELD_OWNER_ID, FIELD_PRIORITY,
    FIELD_TITLE, FIELD_UPDATED_AT,
};
use crate::model::Priority;
use crate::utils::datetime;

/// A single todo entry.
///
/// Items are created client-side (the id is a generated UUID string) and
/// mirrored into one remote document each. Timestamps are milliseconds since
/// the Unix epoch. `description` may be empty; an accepted `title` is never
/// blank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: i64,
    pub updated_at: i64,
    pub owner_id: String,
}

impl TodoItem {
    /// Parse a raw document into an item, applying the load-time fallbacks.
    ///
    /// A document with a missing or blank `title` is treated as corrupt and
    /// yields `None` so the caller can drop it. Unknown `priority` values
    /// parse as Medium, and missing timestamps fall back to the current time.
    /// Ownership is not checked here; the sync layer compares `owner_id`
    /// against the current user.
    pub fn from_fields(id: &str, fields: &Map<String, Value>) -> Option<Self> {
        let title = fields.get(FIELD_TITLE).and_then(Value::as_str).unwrap_or("").trim();
        if title.is_empty() {
            return None;
        }

        let now = datetime::now_ms();
        Some(Self {
            id: id.to_string(),
            title: title.to_string(),
            description: fields
                .get(FIELD_DESCRIPTION)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            completed: fields
                .get(FIELD_IS_COMPLETED)
                .and_then(Value::as_bool)
                .unwrap_or(false),
            priority: fields
                .get(FIELD_PRIORITY)
                .and_then(Value::as_i64)
                .map(Priority::from_value)
                .unwrap_or_default(),
            created_at: fields.get(FIELD_CREATED_AT).and_then(Value::as_i64).unwrap_or(now),
            updated_at: fields.get(FIELD_UPDATED_AT).and_then(Value::as_i64).unwrap_or(now),
            owner_id: fields
                .get(FIELD_OWNER_ID)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Full document representation of this item, used by the add path.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(FIELD_TITLE.to_string(), json!(self.title));
        fields.insert(FIELD_DESCRIPTION.to_string(), json!(self.description));
        fields.insert(FIELD_IS_COMPLETED.to_string(), json!(self.completed));
        fields.insert(FIELD_PRIORITY.to_string(), json!(self.priority.value()));
        fields.insert(FIELD_CREATED_AT.to_string(), json!(self.created_at));
        fields.insert(FIELD_UPDATED_AT.to_string(), json!(self.updated_at));
        fields.insert(FIELD_OWNER_ID.to_string(), json!(self.owner_id));
        fields
    }
}
