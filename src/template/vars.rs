// ABOUTME: Variable set management for template rendering
// ABOUTME: Holds named values (scalar or nested) used to fill placeholders

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

/// Named values substituted into template placeholders.
///
/// Values are loosely typed (string, number, boolean, nested mapping or
/// sequence), matching what a YAML variable document can carry.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct VariableSet {
    values: Map<String, JsonValue>,
}

impl VariableSet {
    /// Create an empty variable set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a variable value
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another variable set into this one; its entries win on conflict
    pub fn extend(&mut self, other: VariableSet) {
        self.values.extend(other.values);
    }

    /// Overlay plain `key=value` string pairs, e.g. from CLI overrides
    pub fn merge_pairs(&mut self, pairs: HashMap<String, String>) {
        for (key, value) in pairs {
            self.values.insert(key, JsonValue::String(value));
        }
    }

    /// Convert the set to a JSON object for rendering
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.values.clone())
    }
}

impl From<Map<String, JsonValue>> for VariableSet {
    fn from(values: Map<String, JsonValue>) -> Self {
        Self { values }
    }
}
