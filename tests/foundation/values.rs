//! Integration tests for Value types
//!
//! Tests construction, shape classification, native equality, and ordering.

use reprcompare_foundation::shape::has_default_eq;
use reprcompare_foundation::{Approx, Error, HostObject, Record, RecordKind, Result, Shape, Value};

struct Generator(Vec<i64>);

impl HostObject for Generator {
    fn type_name(&self) -> &str {
        "generator"
    }

    fn repr(&self) -> Result<String> {
        Ok("<generator object>".to_string())
    }

    fn iterate(&self) -> Option<Result<Vec<Value>>> {
        Some(Ok(self.0.iter().copied().map(Value::Int).collect()))
    }
}

struct FaultyEq;

impl HostObject for FaultyEq {
    fn type_name(&self) -> &str {
        "FaultyEq"
    }

    fn repr(&self) -> Result<String> {
        Ok("FaultyEq()".to_string())
    }

    fn eq_value(&self, _other: &Value) -> Result<bool> {
        Err(Error::eq_failed("FaultyEq", "no"))
    }
}

// =============================================================================
// Shape Classification
// =============================================================================

#[test]
fn text_is_text_not_sequence() {
    let shape = Shape::of(&Value::from("abc"));
    assert!(shape.is_text());
    assert!(!shape.is_sequence());
    assert!(!shape.is_iterable());
}

#[test]
fn builtin_containers() {
    assert!(Shape::of(&Value::list([1])).is_sequence());
    assert!(Shape::of(&Value::tuple([1])).is_sequence());
    assert!(Shape::of(&Value::bytes(b"x")).is_sequence());
    assert!(Shape::of(&Value::frozenset([1])).is_set());
    assert!(Shape::of(&Value::dict([(1, 2)])).is_mapping());
}

#[test]
fn records_classify_by_kind() {
    let nt: Value = Record::named_tuple("P").field("x", 1).build().into();
    let dc: Value = Record::dataclass("P").field("x", 1).build().into();
    let at: Value = Record::attrs("P").field("x", 1).build().into();
    assert_eq!(Shape::of(&nt), Shape::Record(RecordKind::NamedTuple));
    assert_eq!(Shape::of(&dc), Shape::Record(RecordKind::DataClass));
    assert_eq!(Shape::of(&at), Shape::Record(RecordKind::Attrs));
    assert!(Shape::of(&dc).is_field_record());
    assert!(!Shape::of(&nt).is_field_record());
}

#[test]
fn host_objects() {
    assert_eq!(Shape::of(&Value::object(Generator(vec![1]))), Shape::Iterable);
    assert_eq!(Shape::of(&Approx::new(1.0).into()), Shape::Tolerance);
    assert_eq!(Shape::of(&Value::object(FaultyEq)), Shape::Opaque);
}

#[test]
fn default_eq_detection() {
    let plain: Value = Record::attrs("A").field("x", 1).build().into();
    let custom: Value = Record::attrs("A")
        .field("x", 1)
        .custom_eq(|_, _| Ok(true))
        .build()
        .into();
    assert!(has_default_eq(&plain));
    assert!(!has_default_eq(&custom));
}

// =============================================================================
// Native Equality
// =============================================================================

#[test]
fn numbers_compare_by_value() {
    assert!(Value::Int(2).try_eq(&Value::Float(2.0)).unwrap());
    assert!(!Value::Int(2).try_eq(&Value::Float(2.5)).unwrap());
}

#[test]
fn named_tuple_equals_plain_tuple() {
    let nt: Value = Record::named_tuple("P").field("x", 1).field("y", 2).build().into();
    assert!(nt.try_eq(&Value::tuple([1, 2])).unwrap());
    assert!(!nt.try_eq(&Value::list([1, 2])).unwrap());
}

#[test]
fn set_and_frozenset_compare_equal() {
    assert!(Value::set([1, 2]).try_eq(&Value::frozenset([2, 1])).unwrap());
}

#[test]
fn host_equality_failure_propagates() {
    let v = Value::list([Value::object(FaultyEq)]);
    let err = v.try_eq(&Value::list([1])).unwrap_err();
    assert!(err.to_string().contains("FaultyEq.__eq__ failed"));
}

#[test]
fn host_object_is_equal_to_itself() {
    let v = Value::object(FaultyEq);
    assert!(v.try_eq(&v.clone()).unwrap());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn ints_and_floats_interleave() {
    let mut values = vec![Value::Float(2.5), Value::Int(3), Value::Int(1), Value::Float(1.0)];
    values.sort();
    assert_eq!(
        values,
        vec![Value::Int(1), Value::Float(1.0), Value::Float(2.5), Value::Int(3)]
    );
}

#[test]
fn iteration_of_mappings_yields_keys() {
    let d = Value::dict([("b", 1), ("a", 2)]);
    let keys = d.iter_values().unwrap().unwrap();
    assert_eq!(keys, vec![Value::from("a"), Value::from("b")]);
}
