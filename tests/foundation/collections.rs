//! Integration tests for persistent collections
//!
//! Tests structural sharing and value ordering of PVec, PSet, and PMap.

use reprcompare_foundation::{PMap, PSet, PVec, Value};

#[test]
fn pvec_push_is_persistent() {
    let a: PVec<Value> = PVec::new().push_back(Value::Int(1));
    let b = a.push_back(Value::Int(2));
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 2);
    assert_eq!(b.get(1), Some(&Value::Int(2)));
}

#[test]
fn pset_iterates_in_value_order() {
    let set: PSet<Value> = [Value::from("b"), Value::Int(3), Value::from("a"), Value::None]
        .into_iter()
        .collect();
    let items: Vec<&Value> = set.iter().collect();
    assert_eq!(
        items,
        vec![&Value::None, &Value::Int(3), &Value::from("a"), &Value::from("b")]
    );
}

#[test]
fn pset_difference_and_intersection() {
    let a: PSet<Value> = [1, 2, 3].into_iter().map(Value::Int).collect();
    let b: PSet<Value> = [2, 3, 4].into_iter().map(Value::Int).collect();
    let only_a = a.difference(&b);
    assert_eq!(only_a.iter().collect::<Vec<_>>(), vec![&Value::Int(1)]);
    assert_eq!(a.intersection(&b).len(), 2);
}

#[test]
fn pmap_insert_is_persistent() {
    let a: PMap<Value, Value> = PMap::new().insert(Value::from("k"), Value::Int(1));
    let b = a.insert(Value::from("k"), Value::Int(2));
    assert_eq!(a.get(&Value::from("k")), Some(&Value::Int(1)));
    assert_eq!(b.get(&Value::from("k")), Some(&Value::Int(2)));
    assert!(b.contains_key(&Value::from("k")));
}
