//! Integration tests for records
//!
//! Tests field access, comparable fields, and generated versus custom equality.

use std::sync::Arc;

use reprcompare_foundation::{ErrorKind, Record, RecordKind, Value, field_of};

fn user(name: &str, id: i64) -> Record {
    Record::dataclass("User")
        .field("name", name)
        .field_with("id", id, false)
        .build()
}

#[test]
fn field_access() {
    let r = user("ann", 1);
    assert_eq!(r.kind(), RecordKind::DataClass);
    assert_eq!(r.get("name"), Some(&Value::from("ann")));
    assert_eq!(r.get("missing"), None);
    assert_eq!(r.len(), 2);
}

#[test]
fn excluded_fields_do_not_affect_equality() {
    let a: Value = user("ann", 1).into();
    let b: Value = user("ann", 2).into();
    assert!(a.try_eq(&b).unwrap());
    assert_eq!(user("ann", 1).fields_to_compare(), vec![Arc::<str>::from("name")]);
}

#[test]
fn named_tuples_compare_every_field() {
    let nt = Record::named_tuple("P").field_with("x", 1, false).field("y", 2).build();
    assert_eq!(nt.fields_to_compare().len(), 2);
}

#[test]
fn field_of_non_record_fails() {
    let err = field_of(&Value::Int(1), "x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingField { .. }));
}

#[test]
fn custom_equality_is_used() {
    let always: Value = Record::dataclass("Always")
        .field("x", 1)
        .custom_eq(|_, _| Ok(true))
        .build()
        .into();
    assert!(always.try_eq(&Value::Int(5)).unwrap());
}

#[test]
fn named_tuple_custom_equality_is_used() {
    let pair = |x: i64| -> Value {
        Record::named_tuple("P")
            .field("x", x)
            .custom_eq(|_, _| Ok(true))
            .build()
            .into()
    };
    assert!(!pair(1).as_record().unwrap().has_default_eq());
    assert!(pair(1).try_eq(&pair(2)).unwrap());
}
