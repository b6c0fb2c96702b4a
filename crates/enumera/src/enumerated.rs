//! The `Enumerated` trait: declaring a concrete enum and querying it.
//!
//! A concrete enum is a marker type implementing this trait. The required
//! surface is just the definition source; every query operation is a
//! provided method reading the process-wide registry, filling the type's
//! partition on first use.

use crate::definition::Definition;
use crate::entry::{Entry, value_text};
use crate::error::EnumError;
use crate::member::Member;
use crate::registry;
use serde_json::{Map, Value};

/// A closed set of named constants backed by the registry.
pub trait Enumerated: Sized + 'static {
    /// Display name of the concrete enum, used in error messages.
    const NAME: &'static str;

    /// The definition source for this enum's entries. Consulted once, on
    /// the first operation against the type.
    fn definition() -> Definition;

    /// Bind a member to the entry stored under `name`, case-insensitively.
    ///
    /// The member carries the stored entry's original-case name, so
    /// `make("inactive")` on an entry defined as `INACTIVE` yields
    /// `name() == Some("INACTIVE")`. An unknown name is the one lookup
    /// that fails.
    fn make(name: &str) -> Result<Member<Self>, EnumError> {
        match registry::lookup::<Self>(name) {
            Some(entry) => Ok(Member::bound(entry.name, entry.value)),
            None => Err(EnumError::EntryNotFound {
                enum_name: Self::NAME,
                name: name.to_string(),
            }),
        }
    }

    /// Bind a member to an explicit name/value pair, without a lookup.
    /// Instantiation still counts as first use and fills the partition.
    fn make_with(name: impl Into<String>, value: impl Into<Value>) -> Member<Self> {
        registry::ensure::<Self>();
        Member::bound(name, value)
    }

    /// A member bound to nothing. Still fills the partition.
    fn unbound() -> Member<Self> {
        registry::ensure::<Self>();
        Member::unbound()
    }

    /// Mapping from original entry name to value, one pair per entry.
    fn all() -> Map<String, Value> {
        registry::entries::<Self>()
            .into_iter()
            .map(|entry| (entry.name, entry.value))
            .collect()
    }

    /// Entry names, in definition order.
    fn keys() -> Vec<String> {
        registry::entries::<Self>()
            .into_iter()
            .map(|entry| entry.name)
            .collect()
    }

    /// Entry values, in definition order.
    fn values() -> Vec<Value> {
        registry::entries::<Self>()
            .into_iter()
            .map(|entry| entry.value)
            .collect()
    }

    /// Full entry triples, in definition order. The richer sibling of
    /// [`Enumerated::values`], carrying names and metadata.
    fn entries() -> Vec<Entry> {
        registry::entries::<Self>()
    }

    /// First entry whose value matches `value`, as a bound member.
    ///
    /// Non-strict comparison is case-insensitive on the string forms;
    /// strict comparison is exact value equality. A missing match is
    /// `None` in both modes, never an error; an empty partition behaves
    /// exactly like a filled non-matching one.
    fn search(value: impl Into<Value>, strict: bool) -> Option<Member<Self>> {
        let candidate = value.into();
        let loose = value_text(&candidate).to_lowercase();
        registry::entries::<Self>()
            .into_iter()
            .find(|entry| {
                if strict {
                    entry.value == candidate
                } else {
                    value_text(&entry.value).to_lowercase() == loose
                }
            })
            .map(|entry| Member::bound(entry.name, entry.value))
    }

    /// Whether an entry exists under `name`, case-insensitively. Total:
    /// any string input, including empty and unknown names.
    fn is_valid(name: &str) -> bool {
        registry::lookup::<Self>(name).is_some()
    }

    /// Whether any entry's value matches `value`, per [`Enumerated::search`].
    fn is_valid_value(value: impl Into<Value>, strict: bool) -> bool {
        Self::search(value, strict).is_some()
    }

    /// `all()`, as a plain object.
    fn to_object() -> Map<String, Value> {
        Self::all()
    }

    /// `all()`, serialized to JSON text.
    fn to_json() -> Result<String, EnumError> {
        Ok(serde_json::to_string(&Self::to_object())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Toggle;

    impl Enumerated for Toggle {
        const NAME: &'static str = "Toggle";

        fn definition() -> Definition {
            Definition::mapping([("ON", json!(1)), ("OFF", json!(0))])
        }
    }

    struct Hollow;

    impl Enumerated for Hollow {
        const NAME: &'static str = "Hollow";

        fn definition() -> Definition {
            Definition::sequence(Vec::<Value>::new())
        }
    }

    #[test]
    fn all_has_one_pair_per_entry() {
        let all = Toggle::all();
        assert_eq!(all.len(), 2);
        assert_eq!(all.get("ON"), Some(&json!(1)));
        assert_eq!(all.get("OFF"), Some(&json!(0)));
    }

    #[test]
    fn keys_and_values_keep_definition_order() {
        assert_eq!(Toggle::keys(), vec!["ON", "OFF"]);
        assert_eq!(Toggle::values(), vec![json!(1), json!(0)]);
    }

    #[test]
    fn make_resolves_case_insensitively() {
        let on = Toggle::make("on").unwrap();
        assert_eq!(on.name(), Some("ON"));
        assert_eq!(on.value(), Some(&json!(1)));
    }

    #[test]
    fn make_reports_the_name_and_the_enum() {
        let err = Toggle::make("HALF").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the name \"HALF\" is not available in enum Toggle"
        );
    }

    #[test]
    fn make_with_skips_the_lookup_but_fills() {
        let custom = Toggle::make_with("HALF", json!(2));
        assert_eq!(custom.name(), Some("HALF"));
        assert!(crate::registry::is_filled::<Toggle>());
    }

    #[test]
    fn loose_search_compares_string_forms() {
        // Value 1 matches its text form regardless of the candidate type.
        let hit = Toggle::search("1", false).unwrap();
        assert_eq!(hit.name(), Some("ON"));
        assert!(Toggle::search("2", false).is_none());
    }

    #[test]
    fn strict_search_requires_exact_values() {
        assert!(Toggle::search("1", true).is_none());
        let hit = Toggle::search(1, true).unwrap();
        assert_eq!(hit.name(), Some("ON"));
    }

    #[test]
    fn validity_checks_never_fail() {
        assert!(Toggle::is_valid("off"));
        assert!(!Toggle::is_valid("HALF"));
        assert!(!Toggle::is_valid(""));
        assert!(Toggle::is_valid_value(0, true));
        assert!(!Toggle::is_valid_value("ON", false));
    }

    #[test]
    fn empty_definitions_behave_like_non_matching_ones() {
        assert!(Hollow::search("anything", false).is_none());
        assert!(!Hollow::is_valid("anything"));
        assert!(Hollow::all().is_empty());
    }

    #[test]
    fn to_json_serializes_to_object() {
        let text = Toggle::to_json().unwrap();
        let round: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(round, json!({ "OFF": 0, "ON": 1 }));
    }
}
