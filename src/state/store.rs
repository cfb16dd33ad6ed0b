use crate::core::{FieldId, Value};
use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Shared field values of a form. Lives outside the step views so values
/// survive a step being unmounted.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValueStore {
    values: IndexMap<FieldId, Value>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the stored value changed.
    pub fn set(&mut self, id: impl Into<FieldId>, value: Value) -> bool {
        let id = id.into();
        if self.values.get(&id) == Some(&value) {
            return false;
        }
        self.values.insert(id, value);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Value::as_text)
    }

    pub fn is_empty_value(&self, id: &str) -> bool {
        self.get(id).is_none_or(Value::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
