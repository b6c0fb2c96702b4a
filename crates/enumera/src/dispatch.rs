//! Dynamic accessor resolution.
//!
//! Rust has no implicit member interception, so the resolution order is an
//! explicit lookup instead of a proxy: declared methods (including the
//! accessors `declare_enum!` generates) are resolved by the compiler and
//! never reach this path; every other name goes through [`resolve`].

use crate::enumerated::Enumerated;
use crate::error::EnumError;
use crate::member::Member;
use std::fmt;

/// Result of resolving a dynamic member access.
pub enum Access<T: Enumerated> {
    /// An `is<Suffix>` access: the predicate result against the target.
    Predicate(bool),
    /// An entry-name access: a freshly bound member.
    Member(Member<T>),
}

/// Resolve an accessed `name` against the registry.
///
/// A name longer than two characters starting with `is` is a predicate
/// evaluated against `target` (`isActive` asks `target.equals("Active")`).
/// Anything else, including the bare `is`, is treated as an entry name
/// and bound through the same lookup path as `Enumerated::make`, with the
/// same `EntryNotFound` failure for unknown entries.
pub fn resolve<T: Enumerated>(target: &Member<T>, name: &str) -> Result<Access<T>, EnumError> {
    if name.len() > 2 && name.starts_with("is") {
        let suffix = &name[2..];
        return Ok(Access::Predicate(target.equals(suffix)));
    }
    Ok(Access::Member(T::make(name)?))
}

impl<T: Enumerated> fmt::Debug for Access<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Predicate(hit) => f.debug_tuple("Predicate").field(hit).finish(),
            Access::Member(member) => f.debug_tuple("Member").field(member).finish(),
        }
    }
}
