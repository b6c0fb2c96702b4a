//! Definition sources: the shape an enum's entries are declared in.
//!
//! A definition is either an ordered sequence of scalars, where each
//! element is simultaneously its own name and value, or an ordered mapping
//! from key to a scalar value or a full entry record. Concrete enums
//! supply one via `Enumerated::definition`; document-driven callers parse
//! one out of a `serde_json::Value` with [`Definition::from_value`].

use crate::entry::{Entry, value_text};
use crate::error::EnumError;
use serde_json::Value;

/// A caller-supplied definition source.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Ordered scalars; each element is its own name and value.
    Sequence(Vec<Value>),
    /// Ordered key to scalar-or-record pairs.
    Mapping(Vec<(String, DefinitionValue)>),
}

/// The right-hand side of one mapping pair.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionValue {
    /// The pair becomes `{name: key, value}`.
    Scalar(Value),
    /// The record's own name wins over the mapping key.
    Record(Entry),
}

impl Definition {
    /// A sequence definition from scalar items.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Definition::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// A mapping definition from key/scalar pairs.
    pub fn mapping<K: Into<String>, V: Into<Value>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Definition::Mapping(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), DefinitionValue::Scalar(value.into())))
                .collect(),
        )
    }

    /// A mapping definition from key/record pairs.
    pub fn records<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Entry)>) -> Self {
        Definition::Mapping(
            pairs
                .into_iter()
                .map(|(key, record)| (key.into(), DefinitionValue::Record(record)))
                .collect(),
        )
    }

    /// Parse a definition document.
    ///
    /// An array document is a sequence and must contain only scalars. An
    /// object document is a mapping; an object value carrying `name` and
    /// `value` fields is a record (`meta` optional), any other non-scalar
    /// value is rejected.
    pub fn from_value(raw: &Value) -> Result<Self, EnumError> {
        if let Some(items) = raw.as_array() {
            for (idx, item) in items.iter().enumerate() {
                if item.is_array() || item.is_object() {
                    return Err(EnumError::InvalidDefinition(format!(
                        "definition[{idx}] must be a scalar"
                    )));
                }
            }
            return Ok(Definition::Sequence(items.clone()));
        }

        let Some(object) = raw.as_object() else {
            return Err(EnumError::InvalidDefinition(
                "definition document must be an array or an object".to_string(),
            ));
        };

        let mut pairs = Vec::with_capacity(object.len());
        for (key, value) in object {
            let parsed = match value {
                Value::Object(record) => {
                    let Some(name) = record.get("name").and_then(Value::as_str) else {
                        return Err(EnumError::InvalidDefinition(format!(
                            "definition.{key}.name must be a string"
                        )));
                    };
                    let Some(entry_value) = record.get("value") else {
                        return Err(EnumError::InvalidDefinition(format!(
                            "definition.{key}.value is missing"
                        )));
                    };
                    DefinitionValue::Record(Entry {
                        name: name.to_string(),
                        value: entry_value.clone(),
                        meta: record.get("meta").cloned().filter(|meta| !meta.is_null()),
                    })
                }
                Value::Array(_) => {
                    return Err(EnumError::InvalidDefinition(format!(
                        "definition.{key} must be a scalar or an entry record"
                    )));
                }
                scalar => DefinitionValue::Scalar(scalar.clone()),
            };
            pairs.push((key.clone(), parsed));
        }
        Ok(Definition::Mapping(pairs))
    }

    /// Derive the entry triples, in definition order.
    ///
    /// Sequence elements become `{name: text(e), value: e}`; mapping
    /// scalars become `{name: key, value}`; records pass through whole.
    pub(crate) fn entries(&self) -> Vec<Entry> {
        match self {
            Definition::Sequence(items) => items
                .iter()
                .map(|item| Entry::new(value_text(item), item.clone()))
                .collect(),
            Definition::Mapping(pairs) => pairs
                .iter()
                .map(|(key, value)| match value {
                    DefinitionValue::Scalar(scalar) => Entry::new(key.clone(), scalar.clone()),
                    DefinitionValue::Record(record) => record.clone(),
                })
                .collect(),
        }
    }
}
