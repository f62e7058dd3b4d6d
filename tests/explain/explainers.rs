//! Integration tests for shape explainers
//!
//! Each test goes through the dispatcher and checks the detail lines.

use reprcompare_explain::{Config, Operator, explain};
use reprcompare_foundation::{Approx, Record, Value};

fn details(config: &Config, left: &Value, right: &Value) -> Vec<String> {
    let mut out = explain(config, Operator::Eq, left, right).unwrap().unwrap();
    out.remove(0);
    if out.first().is_some_and(String::is_empty) {
        out.remove(0);
    }
    out
}

fn quiet() -> Config {
    Config::default().with_ci(false)
}

fn point(x: i64, y: i64) -> Value {
    Record::dataclass("Point").field("x", x).field("y", y).build().into()
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn one_interior_difference_is_marked() {
    let out = details(&quiet(), &"hello world".into(), &"hello wurld".into());
    assert_eq!(
        out,
        vec!["- hello wurld", "?        ^", "+ hello world", "?        ^"]
    );
}

#[test]
fn long_common_prefix_is_skipped_unless_verbose() {
    let left = Value::from(format!("{}1", "a".repeat(60)));
    let right = Value::from(format!("{}2", "a".repeat(60)));
    let out = details(&quiet(), &left, &right);
    assert_eq!(
        out[0],
        "Skipping 50 identical leading characters in diff, use -v to show"
    );
    let verbose = details(&Config::verbose().with_ci(false), &left, &right);
    assert!(verbose.iter().all(|l| !l.starts_with("Skipping")));
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn index_of_single_difference() {
    let out = details(&quiet(), &Value::list([1, 2, 3]), &Value::list([1, 5, 3]));
    assert_eq!(out, vec!["At index 1 diff: 2 != 5", "Use -v to get more diff"]);
}

#[test]
fn strict_prefix_reports_length_only() {
    let out = details(&quiet(), &Value::list([1, 2]), &Value::list([1, 2, 3]));
    assert_eq!(out, vec!["Right contains one more item: 3", "Use -v to get more diff"]);
}

#[test]
fn named_tuples_drill_into_fields() {
    let pair = |b: i64| -> Value { Record::named_tuple("Pair").field("a", 1).field("b", b).build().into() };
    let out = details(&quiet(), &pair(2), &pair(3));
    assert_eq!(
        out,
        vec![
            "Omitting 1 identical items, use -vv to show",
            "Differing attributes:",
            "['b']",
            "",
            "Drill down into differing attribute b:",
            "  b: 2 != 3",
            "Use -v to get more diff",
        ]
    );
}

// =============================================================================
// Mappings
// =============================================================================

#[test]
fn differing_value_in_mapping() {
    let out = details(
        &quiet(),
        &Value::dict([("a", 1), ("b", 2)]),
        &Value::dict([("a", 1), ("b", 3)]),
    );
    assert_eq!(
        out,
        vec![
            "Omitting 1 identical items, use -vv to show",
            "Differing items:",
            "{'b': 2} != {'b': 3}",
            "Use -v to get more diff",
        ]
    );
}

#[test]
fn common_items_shown_when_very_verbose() {
    let out = details(
        &Config::very_verbose().with_ci(false),
        &Value::dict([("a", 1), ("b", 2)]),
        &Value::dict([("a", 1), ("b", 3)]),
    );
    assert_eq!(out[0], "Common items:");
    assert_eq!(out[1], "{'a': 1}");
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn differing_field_is_drilled_into() {
    let out = details(&quiet(), &point(1, 2), &point(1, 3));
    assert_eq!(
        out,
        vec![
            "Omitting 1 identical items, use -vv to show",
            "Differing attributes:",
            "['y']",
            "",
            "Drill down into differing attribute y:",
            "  y: 2 != 3",
        ]
    );
}

#[test]
fn different_record_types_explain_nothing() {
    let other: Value = Record::dataclass("Vector").field("x", 1).field("y", 3).build().into();
    let out = explain(&quiet(), Operator::Eq, &point(1, 2), &other).unwrap();
    assert!(out.is_none());
}

// =============================================================================
// Tolerances
// =============================================================================

#[test]
fn tolerance_explains_itself() {
    let out = details(&quiet(), &Value::Float(1.5), &Approx::new(1.0).into());
    assert_eq!(
        out,
        vec!["comparison failed", "Obtained: 1.5", "Expected: 1.0 ± 1.0e-06"]
    );
}
