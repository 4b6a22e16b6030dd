extern crate std;

use std::{collections::HashSet, format};

use super::WaitKey;

#[test]
fn raw_zero_is_not_a_valid_key() {
  assert!(!WaitKey::from_raw(0).is_valid());
}

#[test]
fn raw_round_trip_preserves_value() {
  let key = WaitKey::from_raw(42);
  assert!(key.is_valid());
  assert_eq!(key.into_raw(), 42);
}

#[test]
fn keys_hash_by_value() {
  let mut set = HashSet::new();
  set.insert(WaitKey::from_raw(7));
  set.insert(WaitKey::from_raw(7));
  set.insert(WaitKey::from_raw(8));
  assert_eq!(set.len(), 2);
}

#[test]
fn display_includes_raw_value() {
  assert_eq!(format!("{}", WaitKey::from_raw(3)), "wait-key#3");
}
