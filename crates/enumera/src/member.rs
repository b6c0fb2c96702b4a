//! Bound members: the value objects produced by lookups and accessors.

use crate::entry::value_text;
use crate::enumerated::Enumerated;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A lightweight value object bound to one resolved entry of `T`.
///
/// Members hold copies of the entry's name and value, never references
/// into the registry, and are not cached themselves.
pub struct Member<T: Enumerated> {
    name: Option<String>,
    value: Option<Value>,
    _enum: PhantomData<T>,
}

impl<T: Enumerated> Member<T> {
    pub(crate) fn bound(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            _enum: PhantomData,
        }
    }

    pub(crate) fn unbound() -> Self {
        Self {
            name: None,
            value: None,
            _enum: PhantomData,
        }
    }

    /// Name of the bound entry, in its stored case.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Value of the bound entry.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Case-insensitive name comparison against a raw name or another
    /// member. Two nameless members compare equal.
    pub fn equals(&self, other: impl AsEntryName) -> bool {
        match (self.name(), other.entry_name()) {
            (Some(mine), Some(theirs)) => mine.to_lowercase() == theirs.to_lowercase(),
            (None, None) => true,
            _ => false,
        }
    }

    /// Predicate spelling of [`Member::equals`]: `member.is("ACTIVE")`.
    pub fn is(&self, name: &str) -> bool {
        self.equals(name)
    }
}

/// Anything that can stand in for an entry name in comparisons.
pub trait AsEntryName {
    fn entry_name(&self) -> Option<&str>;
}

impl AsEntryName for &str {
    fn entry_name(&self) -> Option<&str> {
        Some(*self)
    }
}

impl AsEntryName for String {
    fn entry_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsEntryName for &String {
    fn entry_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Enumerated> AsEntryName for Member<T> {
    fn entry_name(&self) -> Option<&str> {
        self.name()
    }
}

impl<T: Enumerated> AsEntryName for &Member<T> {
    fn entry_name(&self) -> Option<&str> {
        self.name()
    }
}

impl<T: Enumerated> Clone for Member<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value.clone(),
            _enum: PhantomData,
        }
    }
}

impl<T: Enumerated> PartialEq for Member<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Enumerated> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("enum", &T::NAME)
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

impl<T: Enumerated> fmt::Display for Member<T> {
    /// Renders the scalar value. A value that is itself an entry-shaped
    /// object renders its nested `value` field; a valueless member
    /// renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.value() else {
            return Ok(());
        };
        let scalar = match value {
            Value::Object(record) => record.get("value").unwrap_or(value),
            other => other,
        };
        write!(f, "{}", value_text(scalar))
    }
}
