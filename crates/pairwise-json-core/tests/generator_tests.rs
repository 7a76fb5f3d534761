//! End-to-end generation tests: fixture-driven cases plus the coverage,
//! cardinality, and dedup properties the generator guarantees.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use pairwise_json_core::{generate, ErrorCode, Properties, Restriction};
use serde::Deserialize;
use serde_json::{json, Value};

// ── Fixture-driven cases ────────────────────────────────────────────────────

const CASES_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cases/pairwise-cases.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestData {
    test_cases: Vec<Case>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Case {
    name: String,
    source: Value,
    #[serde(default)]
    properties: Properties,
    expected: Vec<Value>,
}

fn load_cases() -> Vec<Case> {
    let content = fs::read_to_string(Path::new(CASES_FILE))
        .unwrap_or_else(|e| panic!("Failed to read fixture file: {e}"));
    let data: TestData =
        serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse fixtures: {e}"));
    data.test_cases
}

#[test]
fn fixture_cases_contain_all_expected_results() {
    for case in load_cases() {
        let generated = generate(&case.source, &case.properties)
            .unwrap_or_else(|e| panic!("case '{}' failed: {e}", case.name));
        for expected in &case.expected {
            assert!(
                generated.contains(expected),
                "case '{}': expected result {expected} not generated (got {generated:?})",
                case.name
            );
        }
    }
}

// ── Pairwise coverage ───────────────────────────────────────────────────────

#[test]
fn leaf_fields_are_pairwise_complete() {
    let schema = json!({ "a": [1, 2], "b": [3, 4, 5], "c": [true, false] });
    let results = generate(&schema, &Properties::default()).unwrap();

    let fields: Vec<(&str, Vec<Value>)> = vec![
        ("a", vec![json!(1), json!(2)]),
        ("b", vec![json!(3), json!(4), json!(5)]),
        ("c", vec![json!(true), json!(false)]),
    ];

    for (i, (fa, va)) in fields.iter().enumerate() {
        for (fb, vb) in fields.iter().skip(i + 1) {
            for a in va {
                for b in vb {
                    assert!(
                        results.iter().any(|r| r[fa] == *a && r[fb] == *b),
                        "pair ({fa}={a}, {fb}={b}) never appears"
                    );
                }
            }
        }
    }
}

#[test]
fn leaf_and_object_assignments_are_paired() {
    let schema = json!({
        "flag": [true, false],
        "child": [{ "x": [1, 2] }, { "x": [3, 4] }]
    });
    let props = Properties {
        objects: ["child".to_string()].into(),
        max_restrictions: vec![Restriction::new("child", 1)],
        ..Default::default()
    };
    let results = generate(&schema, &props).unwrap();

    let children = [json!(null), json!({"x": 1}), json!({"x": 2}), json!({"x": 3}), json!({"x": 4})];
    for flag in [json!(true), json!(false)] {
        for child in &children {
            assert!(
                results
                    .iter()
                    .any(|r| r["flag"] == flag && r["child"] == *child),
                "pair (flag={flag}, child={child}) never appears"
            );
        }
    }
}

// ── Cardinality ─────────────────────────────────────────────────────────────

#[test]
fn list_field_never_exceeds_maximum_slots() {
    let schema = json!({ "child": [{ "x": [1, 2] }, { "x": [3, 4] }] });
    let props = Properties {
        max_restrictions: vec![Restriction::new("child", 2)],
        ..Default::default()
    };
    let results = generate(&schema, &props).unwrap();
    assert!(!results.is_empty());

    for result in &results {
        let entries = result["child"].as_array().expect("child is a list field");
        assert!(entries.len() <= 2, "more than 2 entries in {result}");

        let distinct: HashSet<String> = entries.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            distinct.len(),
            entries.len(),
            "duplicate variant within one result: {result}"
        );
    }
}

#[test]
fn bounded_list_field_respects_minimum_and_maximum() {
    let schema = json!({ "child": [{ "x": [1, 2] }, { "x": [3, 4] }] });
    let props = Properties {
        min_restrictions: vec![Restriction::new("child", 1)],
        max_restrictions: vec![Restriction::new("child", 2)],
        ..Default::default()
    };
    let results = generate(&schema, &props).unwrap();
    assert!(!results.is_empty());

    let variants = [json!({"x": 1}), json!({"x": 2}), json!({"x": 3}), json!({"x": 4})];
    for result in &results {
        let entries = result["child"].as_array().expect("child is a list field");
        assert!(
            (1..=2).contains(&entries.len()),
            "child length out of bounds in {result}"
        );
        for entry in entries {
            assert!(variants.contains(entry), "unknown variant {entry}");
        }
        let distinct: HashSet<String> = entries.iter().map(|e| e.to_string()).collect();
        assert_eq!(distinct.len(), entries.len());
    }
}

#[test]
fn generation_fails_when_variants_fall_below_minimum() {
    let schema = json!({ "child": [{ "x": [1, 2] }, { "x": [3, 4] }] });
    let props = Properties {
        min_restrictions: vec![Restriction::new("child", 5)],
        ..Default::default()
    };
    let err = generate(&schema, &props).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::InsufficientVariants);
}

// ── Singular object fields ──────────────────────────────────────────────────

#[test]
fn singular_object_field_is_never_a_list() {
    let schema = json!({ "child": [{ "x": [1, 2] }, { "x": [3, 4] }] });
    let props = Properties {
        objects: ["child".to_string()].into(),
        max_restrictions: vec![Restriction::new("child", 1)],
        ..Default::default()
    };
    let results = generate(&schema, &props).unwrap();
    assert!(!results.is_empty());

    let allowed = [json!({"x": 1}), json!({"x": 2}), json!({"x": 3}), json!({"x": 4})];
    for result in &results {
        let child = &result["child"];
        assert!(!child.is_array(), "singular field became a list: {result}");
        assert!(
            child.is_null() || allowed.contains(child),
            "unexpected child: {result}"
        );
    }
}

// ── Deduplication ───────────────────────────────────────────────────────────

#[test]
fn repeated_generation_is_set_equal_and_duplicate_free() {
    let schema = json!({
        "fieldC": [{ "x": [1] }],
        "fieldD": [{ "y": [1, 2, 3] }]
    });
    let props = Properties {
        max_restrictions: vec![Restriction::new("fieldC", 1), Restriction::new("fieldD", 2)],
        ..Default::default()
    };

    let first = generate(&schema, &props).unwrap();
    let second = generate(&schema, &props).unwrap();

    let as_set = |results: &[Value]| -> HashSet<String> {
        results.iter().map(|r| r.to_string()).collect()
    };

    let first_set = as_set(&first);
    let second_set = as_set(&second);
    assert_eq!(first_set, second_set);
    assert_eq!(first_set.len(), first.len(), "duplicates within one run");
    assert_eq!(second_set.len(), second.len(), "duplicates within one run");
}

// ── Deep nesting ────────────────────────────────────────────────────────────

#[test]
fn two_level_nesting_reconstructs_each_level() {
    let schema = json!({
        "name": ["fixed"],
        "outer": [{
            "inner": [{ "x": [1, 2] }],
            "y": [true, false]
        }]
    });
    let props = Properties {
        objects: ["outer", "outer.inner"]
            .into_iter()
            .map(String::from)
            .collect(),
        max_restrictions: vec![
            Restriction::new("outer", 1),
            Restriction::new("outer.inner", 1),
        ],
        ..Default::default()
    };
    let results = generate(&schema, &props).unwrap();
    assert!(!results.is_empty());

    for result in &results {
        assert_eq!(result["name"], json!("fixed"));
        let outer = &result["outer"];
        if outer.is_null() {
            continue;
        }
        assert!(outer["y"].is_boolean());
        let inner = &outer["inner"];
        assert!(inner.is_null() || inner["x"] == json!(1) || inner["x"] == json!(2));
    }

    // At least one case realizes the full depth.
    assert!(
        results
            .iter()
            .any(|r| r["outer"].is_object() && r["outer"]["inner"].is_object()),
        "no result realized both nesting levels"
    );
}

// ── Structural errors ───────────────────────────────────────────────────────

#[test]
fn structural_errors_carry_distinct_codes() {
    let cases: Vec<(Value, ErrorCode)> = vec![
        (json!(17), ErrorCode::SchemaNotAnObject),
        (json!({ "a": "scalar" }), ErrorCode::NotAListOfValues),
        (json!({ "a": [] }), ErrorCode::EmptyDomain),
        (json!({ "a.b": [1] }), ErrorCode::InvalidFieldName),
        (json!({ "": [1] }), ErrorCode::InvalidFieldName),
    ];

    for (schema, expected) in cases {
        let err = generate(&schema, &Properties::default()).unwrap_err();
        assert_eq!(err.error_code(), expected, "schema: {schema}");
    }
}
