extern crate std;

use std::{sync::Arc, thread, vec::Vec};

use portable_atomic::AtomicU64;

use super::WaitKeyAllocator;

#[test]
fn first_key_is_valid() {
  let allocator = WaitKeyAllocator::new();
  let key = allocator.allocate();
  assert!(key.is_valid());
  assert_eq!(key.into_raw(), 1);
}

#[test]
fn keys_increase_monotonically() {
  let allocator = WaitKeyAllocator::default();
  let first = allocator.allocate();
  let second = allocator.allocate();
  assert!(second > first);
  assert_eq!(second.into_raw(), first.into_raw() + 1);
}

#[test]
fn wrapped_counter_skips_zero() {
  let allocator = WaitKeyAllocator { counter: AtomicU64::new(u64::MAX) };
  assert_eq!(allocator.allocate().into_raw(), u64::MAX);
  let wrapped = allocator.allocate();
  assert!(wrapped.is_valid());
  assert_eq!(wrapped.into_raw(), 1);
}

#[test]
fn concurrent_allocation_yields_unique_keys() {
  let allocator = Arc::new(WaitKeyAllocator::new());
  let handles: Vec<_> = (0..4)
    .map(|_| {
      let allocator = Arc::clone(&allocator);
      thread::spawn(move || (0..64).map(|_| allocator.allocate().into_raw()).collect::<Vec<_>>())
    })
    .collect();

  let mut keys: Vec<u64> = handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect();
  keys.sort_unstable();
  keys.dedup();
  assert_eq!(keys.len(), 4 * 64);
}
