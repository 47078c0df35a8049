//! Edge case tests for cirrus-core
//!
//! These tests cover boundary conditions and unusual inputs.

use cirrus_core::{create_query, simple_query, Comparator, FieldClass, Query, Record, StringList};
use serde_json::{json, Value};

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn empty_identifiers_are_accepted() {
    // Empty record types and field names build without rejection.
    let query = create_query("").equals("", "").build();

    assert_eq!(query.record_type, "");
    assert_eq!(query.filter_by[0].field_name, "");
    assert_eq!(query.filter_by[0].field_value, json!(""));
}

#[test]
fn unicode_identifiers_and_values() {
    let names = [
        "日本語テスト",
        "Привет мир",
        "مرحبا بالعالم",
        "🎉🚀💯",
        "Hello\nWorld\tTab",
    ];

    for name in names {
        let query = create_query(name).equals(name, name).sort_ascending(name).build();

        assert_eq!(query.record_type, name);
        assert_eq!(query.filter_by[0].field_value, json!(name));

        let wire = serde_json::to_string(&query).unwrap();
        let parsed: Query = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed, query);
    }
}

#[test]
fn very_long_string_values() {
    let long = "x".repeat(1024 * 1024);
    let query = create_query("Note").contains("body", long.clone()).build();

    assert_eq!(query.filter_by[0].field_value, json!(long));
}

// ============================================================================
// Builder Edge Cases
// ============================================================================

#[test]
fn long_filter_chains_keep_order() {
    let mut builder = create_query("Note");
    for i in 0..200 {
        builder = builder.equals(format!("field_{}", i), i);
    }
    let query = builder.build();

    assert_eq!(query.filter_by.len(), 200);
    for (i, filter) in query.filter_by.iter().enumerate() {
        assert_eq!(filter.field_name, format!("field_{}", i));
        assert_eq!(filter.field_value, json!(i));
    }
}

#[test]
fn duplicate_fields_accumulate() {
    // The same field may be filtered and sorted repeatedly; nothing dedups.
    let query = create_query("Note")
        .equals("title", "a")
        .equals("title", "b")
        .sort_ascending("title")
        .sort_descending("title")
        .build();

    assert_eq!(query.filter_by.len(), 2);
    assert_eq!(query.sort_by.len(), 2);
}

#[test]
fn select_with_no_keys_is_kept() {
    // An empty projection is distinct from no projection.
    let query = create_query("Note").select(Vec::<String>::new()).build();
    assert_eq!(query.desired_keys, Some(vec![]));

    let wire = serde_json::to_string(&query).unwrap();
    assert!(wire.contains("\"desiredKeys\":[]"));
}

#[test]
fn zero_and_max_limits_pass_through() {
    assert_eq!(create_query("Note").limit(0).build().results_limit, Some(0));
    assert_eq!(
        create_query("Note").limit(u32::MAX).build().results_limit,
        Some(u32::MAX)
    );
}

#[test]
fn snapshots_survive_heavy_reuse() {
    let base = create_query("Note").equals("archived", false);

    let snapshots: Vec<Query> = (0..10)
        .map(|i| base.clone().limit(i).build())
        .collect();

    for (i, snapshot) in snapshots.iter().enumerate() {
        assert_eq!(snapshot.results_limit, Some(i as u32));
        assert_eq!(snapshot.filter_by.len(), 1);
    }
    // The shared base never picked up a limit.
    assert_eq!(base.build().results_limit, None);
}

// ============================================================================
// Classification Edge Cases
// ============================================================================

#[test]
fn extreme_coordinates_still_classify() {
    let query = create_query("Cafe")
        .near("position", f64::MAX, f64::MIN)
        .build();

    assert_eq!(
        FieldClass::of(&query.filter_by[0].field_value),
        FieldClass::Location
    );
}

#[test]
fn nested_values_classify_by_outer_shape_only() {
    // A list of location-shaped objects is a list, not a location.
    let value = json!([{"latitude": 1.0, "longitude": 2.0}]);
    assert_eq!(FieldClass::of(&value), FieldClass::List);

    // A location that nests lists is still a location.
    let value = json!({"latitude": 1.0, "longitude": 2.0, "tags": ["a"]});
    assert_eq!(FieldClass::of(&value), FieldClass::Location);
}

#[test]
fn typed_list_values_work_in_filters() {
    let tags: Value = StringList::new(["errand", "urgent"]).into();
    let query = create_query("Note")
        .filter("tags", Comparator::ContainsAny, tags.clone())
        .build();

    assert!(query.filter_by[0].comparator.is_valid_for(&tags));
}

// ============================================================================
// Wire Contract
// ============================================================================

#[test]
fn descriptor_wire_keys_are_stable() {
    let query = create_query("Note")
        .equals("title", "x")
        .sort_ascending("title")
        .limit(1)
        .select(["title"])
        .build();

    let value = serde_json::to_value(&query).unwrap();
    let mut keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["desiredKeys", "filterBy", "recordType", "resultsLimit", "sortBy"]
    );

    let mut filter_keys: Vec<&String> =
        value["filterBy"][0].as_object().unwrap().keys().collect();
    filter_keys.sort();
    assert_eq!(filter_keys, ["comparator", "fieldName", "fieldValue"]);

    let mut sort_keys: Vec<&String> = value["sortBy"][0].as_object().unwrap().keys().collect();
    sort_keys.sort();
    assert_eq!(sort_keys, ["ascending", "fieldName"]);
}

#[test]
fn descriptor_parses_from_store_payload() {
    let wire = r#"{
        "recordType": "Note",
        "filterBy": [
            {"fieldName": "title", "comparator": "BEGINS_WITH_ANY", "fieldValue": "x"}
        ],
        "sortBy": []
    }"#;

    // Unknown comparator names fail to parse; the vocabulary is closed.
    assert!(serde_json::from_str::<Query>(wire).is_err());

    let wire = wire.replace("BEGINS_WITH_ANY", "STARTS_WITH");
    let query: Query = serde_json::from_str(&wire).unwrap();
    assert_eq!(query.filter_by[0].comparator, Comparator::StartsWith);
    assert_eq!(query.results_limit, None);
}

#[test]
fn simple_query_over_record_fields() {
    let record = Record::new("note-1", "Note").with_field("title", "Groceries");
    let query = simple_query("Note", "title", record.field("title").unwrap().clone());

    assert_eq!(query.filter_by.len(), 1);
    assert_eq!(query.filter_by[0].field_value, json!("Groceries"));
}
