//! Entry model: one enumerated constant.
//!
//! An entry is the immutable triple (name, value, optional metadata). The
//! stored name keeps the case it was defined with; the registry indexes it
//! under the canonical upper-cased key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One enumerated constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Name as defined, original case preserved.
    pub name: String,
    /// Value payload. Usually a scalar; entry-shaped objects are allowed
    /// and rendered through their nested `value` field by `Member`.
    pub value: Value,
    /// Optional metadata carried over from a record definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            meta: None,
        }
    }

    pub fn with_meta(
        name: impl Into<String>,
        value: impl Into<Value>,
        meta: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            meta: Some(meta.into()),
        }
    }

    /// Canonical registry key for this entry.
    pub fn canonical_name(&self) -> String {
        canonical(&self.name)
    }
}

/// Case-fold a name to its canonical key form.
///
/// Normalization happens once at the boundary, on insert and on lookup;
/// the canonical form is never stored on the entry itself.
pub(crate) fn canonical(name: &str) -> String {
    name.to_uppercase()
}

/// String form of a value, for loose comparison and display.
///
/// Strings render bare, everything else renders as its JSON text.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
