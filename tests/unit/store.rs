use super::*;
use crate::value::Value;

#[test]
fn vec_store_resize_pads_with_identity() {
    let mut s = VecStore::new(ValueKind::Float);
    s.resize(3);
    assert_eq!(s.len(), 3);
    assert_eq!(s.get(2), Value::Float(0.0));
}

#[test]
fn vec_store_insert_and_remove() {
    let mut s = VecStore::new(ValueKind::Int32);
    s.resize(2);
    s.insert(1, Value::Int32(42));
    assert_eq!(s.len(), 3);
    assert_eq!(s.get(1), Value::Int32(42));
    s.remove(1);
    assert_eq!(s.len(), 2);
    assert_eq!(s.get(1), Value::Int32(0));
}

#[test]
fn vec_store_add_and_remove_range() {
    let mut s = VecStore::new(ValueKind::Bool);
    s.add_range(0, 3);
    assert_eq!(s.len(), 3);
    s.remove_range(1, 2);
    assert_eq!(s.len(), 1);
}

#[test]
fn key_store_keeps_times_and_values_in_lockstep() {
    let mut ks = KeyStore::new(VecStore::new(ValueKind::Float));
    ks.insert(0, 1.0, Value::Float(10.0));
    ks.insert(0, 0.0, Value::Float(0.0));
    assert_eq!(ks.len(), 2);
    assert_eq!(ks.times(), &[0.0, 1.0]);
    assert_eq!(ks.get_value(1), Value::Float(10.0));
}

#[test]
fn key_store_refresh_bumps_generation_on_every_mutation() {
    let mut ks = KeyStore::new(VecStore::new(ValueKind::Float));
    let g0 = ks.generation();
    ks.insert(0, 0.0, Value::Float(0.0));
    assert!(ks.generation() > g0);
    let g1 = ks.generation();
    ks.set_value(0, Value::Float(1.0));
    assert!(ks.generation() > g1);
}

#[test]
fn key_store_add_value_range_grows_both_arrays() {
    let mut ks = KeyStore::new(VecStore::new(ValueKind::Float));
    ks.resize(2);
    ks.add_value_range(1, 2);
    assert_eq!(ks.len(), 4);
}
