//! Integration tests: document-driven definitions and record entries.

use enumera::{Definition, Enumerated, Value};
use serde_json::json;

struct Signal;

impl Enumerated for Signal {
    const NAME: &'static str = "Signal";

    fn definition() -> Definition {
        Definition::from_value(&json!({
            "GO": "go",
            "HALT": { "name": "STOP", "value": "stop", "meta": { "severity": "high" } },
        }))
        .expect("the signal definition document parses")
    }
}

struct Level;

impl Enumerated for Level {
    const NAME: &'static str = "Level";

    fn definition() -> Definition {
        Definition::sequence([1, 2, 3])
    }
}

#[test]
fn record_names_win_over_mapping_keys() {
    // serde_json object iteration is key-sorted: GO before HALT.
    assert_eq!(Signal::keys(), vec!["GO", "STOP"]);
    assert!(!Signal::is_valid("HALT"));
    assert!(Signal::is_valid("stop"));
}

#[test]
fn record_metadata_survives_loading() {
    let entries = Signal::entries();
    assert_eq!(entries[0].meta, None);
    assert_eq!(entries[1].meta, Some(json!({ "severity": "high" })));
}

#[test]
fn record_backed_members_behave_like_scalar_ones() {
    let stop = Signal::make("Stop").unwrap();
    assert_eq!(stop.name(), Some("STOP"));
    assert_eq!(stop.to_string(), "stop");
    assert!(Signal::is_valid_value("STOP", false));
    assert!(!Signal::is_valid_value("STOP", true));
}

#[test]
fn numeric_sequences_name_entries_by_their_text() {
    assert_eq!(Level::keys(), vec!["1", "2", "3"]);

    let two = Level::make("2").unwrap();
    assert_eq!(two.value(), Some(&json!(2)));
    assert_eq!(two.to_string(), "2");
}

#[test]
fn numeric_values_match_strictly_and_loosely() {
    assert!(Level::search(2, true).is_some());
    assert!(Level::search("2", true).is_none());
    assert!(Level::search("2", false).is_some());
    assert_eq!(Level::values(), vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn all_values_stay_typed() {
    let all = Level::all();
    assert_eq!(all.get("1"), Some(&Value::from(1)));
}
