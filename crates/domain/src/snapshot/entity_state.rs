//! State of a single entity inside a snapshot.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::attribute::attribute_text;
use crate::backup::{BACKUP_LIST_ATTRIBUTE, BackupRecord};

/// State string plus free-form attributes, as published by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    #[serde(deserialize_with = "state_text")]
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

fn state_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        value => attribute_text(&value).ok_or_else(|| {
            serde::de::Error::custom("entity state must be a string, number or boolean")
        }),
    }
}

impl EntityState {
    /// Create an entity state with no attributes.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: Map::new(),
        }
    }

    /// Add an attribute while building a state.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Raw attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Attribute value in text form, see [`attribute_text`].
    #[must_use]
    pub fn attribute_text(&self, key: &str) -> Option<String> {
        self.attribute(key).and_then(attribute_text)
    }

    /// Serialized form of the `backup_list` attribute, used to detect changes.
    #[must_use]
    pub fn backup_list_fingerprint(&self) -> Option<String> {
        self.attribute(BACKUP_LIST_ATTRIBUTE).map(Value::to_string)
    }

    /// Backup records in the order the host published them.
    ///
    /// A missing or non-array attribute yields an empty list. Elements that
    /// are not objects are skipped; partial objects are kept.
    #[must_use]
    pub fn backup_list(&self) -> Vec<BackupRecord> {
        match self.attribute(BACKUP_LIST_ATTRIBUTE) {
            Some(Value::Array(items)) => items.iter().filter_map(BackupRecord::from_value).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_accept_numeric_state() {
        let state: EntityState = serde_json::from_str(r#"{"state": 600}"#).unwrap();
        assert_eq!(state.state, "600");
    }

    #[test]
    fn should_keep_empty_string_state() {
        let state: EntityState = serde_json::from_str(r#"{"state": ""}"#).unwrap();
        assert_eq!(state.state, "");
    }

    #[test]
    fn should_reject_object_state() {
        let result: Result<EntityState, _> = serde_json::from_str(r#"{"state": {"a": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_empty_list_when_attribute_missing() {
        assert!(EntityState::new("0").backup_list().is_empty());
    }

    #[test]
    fn should_return_empty_list_when_attribute_is_not_an_array() {
        let state = EntityState::new("0").with_attribute("backup_list", "nope");
        assert!(state.backup_list().is_empty());
    }

    #[test]
    fn should_skip_non_object_elements_but_keep_partial_records() {
        let state = EntityState::new("2").with_attribute(
            "backup_list",
            json!([42, {"name": "partial"}, {"name": "full", "hash": "abc"}]),
        );
        let records = state.backup_list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("partial"));
        assert!(records[0].hash.is_none());
        assert_eq!(records[1].name.as_deref(), Some("full"));
    }

    #[test]
    fn should_fingerprint_backup_list() {
        let a = EntityState::new("1").with_attribute("backup_list", json!([{"name": "a"}]));
        let b = EntityState::new("1").with_attribute("backup_list", json!([{"name": "b"}]));
        assert_ne!(a.backup_list_fingerprint(), b.backup_list_fingerprint());
        assert_eq!(a.backup_list_fingerprint(), a.clone().backup_list_fingerprint());
        assert!(EntityState::new("1").backup_list_fingerprint().is_none());
    }

    #[test]
    fn should_read_attribute_text() {
        let state = EntityState::new("ok").with_attribute("backup_size", 120);
        assert_eq!(state.attribute_text("backup_size").as_deref(), Some("120"));
        assert!(state.attribute_text("missing").is_none());
    }
}
