//! Integration tests for the dispatcher
//!
//! Tests summary lines, routing by shape and operator, and failure handling.

use reprcompare_explain::{
    Config, Operator, PlainHighlighter, VerbosityKind, VerbosityProvider, explain, explain_with,
};
use reprcompare_foundation::{Error, HostObject, Result, Value};

fn config() -> Config {
    Config::default().with_ci(false)
}

fn lines(op: Operator, left: &Value, right: &Value) -> Vec<String> {
    explain(&config(), op, left, right).unwrap().unwrap()
}

struct Fixed(i32);

impl VerbosityProvider for Fixed {
    fn get_verbosity(&self, kind: VerbosityKind) -> i32 {
        match kind {
            VerbosityKind::Global => 0,
            VerbosityKind::Assertions => self.0,
        }
    }

    fn ci_override(&self) -> Option<bool> {
        Some(false)
    }
}

struct PoisonedEq;

impl HostObject for PoisonedEq {
    fn type_name(&self) -> &str {
        "PoisonedEq"
    }

    fn repr(&self) -> Result<String> {
        Ok("PoisonedEq()".to_string())
    }

    fn eq_value(&self, _other: &Value) -> Result<bool> {
        Err(Error::eq_failed("PoisonedEq", "poisoned"))
    }
}

// =============================================================================
// Assembly
// =============================================================================

#[test]
fn summary_blank_line_and_details() {
    let out = lines(Operator::Eq, &"spam".into(), &"eggs".into());
    assert_eq!(out, vec!["'spam' == 'eggs'", "", "- eggs", "+ spam"]);
}

#[test]
fn identical_text_has_no_explanation() {
    let out = explain(&config(), Operator::Eq, &"same".into(), &"same".into()).unwrap();
    assert!(out.is_none());
}

#[test]
fn scalars_have_no_explanation() {
    let out = explain(&config(), Operator::Eq, &Value::Int(1), &Value::Float(2.5)).unwrap();
    assert!(out.is_none());
}

#[test]
fn summary_is_bounded_per_operator() {
    let left = Value::list(0..50);
    let right = Value::list(1..51);
    let out = lines(Operator::Eq, &left, &right);
    let (l, r) = out[0].split_once(" == ").unwrap();
    assert!(l.chars().count() <= 30);
    assert!(r.chars().count() <= 30);
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn ordering_operators_on_non_sets_explain_nothing() {
    let out = explain(&config(), Operator::Ge, &Value::list([1]), &Value::list([2])).unwrap();
    assert!(out.is_none());
}

#[test]
fn sets_route_before_equality() {
    let out = lines(Operator::Eq, &Value::set([1, 2]), &Value::set([2, 3]));
    assert_eq!(
        out,
        vec![
            "{1, 2} == {2, 3}",
            "",
            "Extra items in the left set:",
            "1",
            "Extra items in the right set:",
            "3",
        ]
    );
}

#[test]
fn not_in_shows_the_occurrence() {
    let out = lines(Operator::NotIn, &"foo".into(), &"some foo here".into());
    assert_eq!(
        out,
        vec![
            "'foo' not in 'some foo here'",
            "",
            "'foo' is contained here:",
            "  some foo here",
            "?      +++",
        ]
    );
}

#[test]
fn not_in_on_non_text_explains_nothing() {
    let out = explain(&config(), Operator::NotIn, &Value::Int(1), &Value::list([1])).unwrap();
    assert!(out.is_none());
}

// =============================================================================
// Verbosity
// =============================================================================

#[test]
fn assertion_verbosity_enables_full_diff() {
    let out = explain_with(
        &Fixed(1),
        &PlainHighlighter,
        Operator::Eq,
        &Value::list([1, 2]),
        &Value::list([1, 3]),
    )
    .unwrap()
    .unwrap();
    assert_eq!(out[2], "At index 1 diff: 2 != 3");
    assert_eq!(out[3], "");
    assert_eq!(out[4], "Full diff:");
}

#[test]
fn ci_forces_full_diff() {
    let out = explain(
        &Config::default().with_ci(true),
        Operator::Eq,
        &Value::list([1]),
        &Value::list([2]),
    )
    .unwrap()
    .unwrap();
    assert!(out.contains(&"Full diff:".to_string()));
    assert!(!out.contains(&"Use -v to get more diff".to_string()));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn failing_host_equality_is_reported_not_raised() {
    let left = Value::list([Value::object(PoisonedEq)]);
    let out = lines(Operator::Eq, &left, &Value::list([1]));
    assert_eq!(out[0], "[PoisonedEq()] == [1]");
    assert_eq!(
        out[2],
        "(reprcompare: representation of details failed: PoisonedEq.__eq__ failed: poisoned."
    );
    assert_eq!(out[3], " Probably an object has a faulty __repr__.)");
    assert_eq!(out.len(), 4);
}

#[test]
fn unknown_operator_symbol_is_rejected() {
    let err = "is not".parse::<Operator>().unwrap_err();
    assert!(err.to_string().contains("is not"));
}
