//! Integration tests for representations
//!
//! Tests fallible repr, bounded and unbounded safe repr, and pretty printing.

use reprcompare_foundation::repr::{repr, saferepr, saferepr_unlimited};
use reprcompare_foundation::{Approx, PrettyPrinter, Record, Value, pformat};

#[test]
fn repr_of_nested_values() {
    let v = Value::dict([("k", Value::list([Value::None, Value::Bool(false), Value::Float(0.5)]))]);
    assert_eq!(repr(&v).unwrap(), "{'k': [None, False, 0.5]}");
}

#[test]
fn bytes_repr() {
    assert_eq!(repr(&Value::bytes(b"a'b")).unwrap(), "b\"a'b\"");
}

#[test]
fn saferepr_never_exceeds_maxsize() {
    for len in [0, 10, 50, 500] {
        let v = Value::from("z".repeat(len));
        assert!(saferepr(&v, 40, false).chars().count() <= 40);
    }
}

#[test]
fn saferepr_nesting_is_cut() {
    let mut v = Value::list([1]);
    for _ in 0..10 {
        v = Value::list([v]);
    }
    assert!(saferepr(&v, 240, false).contains("[...]"));
    assert!(!saferepr_unlimited(&v, false).contains("..."));
}

#[test]
fn approx_repr() {
    assert_eq!(repr(&Approx::new(2.0).into()).unwrap(), "2.0 ± 2.0e-06");
}

#[test]
fn pformat_fits_on_one_line() {
    let v = Value::list(["a", "b"]);
    assert_eq!(pformat(&v).unwrap(), "['a', 'b']");
}

#[test]
fn pretty_printer_expands_nested_dataclass() {
    let inner: Value = Record::dataclass("Inner").field("v", 1).build().into();
    let v = Value::list([inner]);
    assert_eq!(
        PrettyPrinter::new().pformat(&v).unwrap(),
        "[\n    Inner(\n        v=1,\n    ),\n]"
    );
}
