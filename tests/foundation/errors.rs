//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use reprcompare_foundation::{Error, ErrorKind};

#[test]
fn error_repr_failed() {
    let err = Error::repr_failed("Thing", "bad");
    assert!(matches!(err.kind, ErrorKind::ReprFailed { .. }));
    assert_eq!(format!("{err}"), "Thing.__repr__ failed: bad");
}

#[test]
fn error_missing_field() {
    let err = Error::missing_field("tuple", "x");
    assert_eq!(format!("{err}"), "'tuple' object has no attribute 'x'");
}

#[test]
fn error_iter_failed() {
    let err = Error::iter_failed("gen", "exhausted");
    assert!(matches!(err.kind, ErrorKind::IterFailed { .. }));
    assert!(format!("{err}").contains("exhausted"));
}

#[test]
fn error_unknown_operator() {
    let err = Error::unknown_operator("is not");
    assert!(matches!(err.kind, ErrorKind::UnknownOperator(_)));
    assert!(format!("{err}").contains("is not"));
}

#[test]
fn only_exit_is_exit() {
    assert!(Error::exit("bye").is_exit());
    assert!(!Error::eq_failed("T", "m").is_exit());
}
