extern crate std;

use std::vec::Vec;

use super::MsgRing;
use crate::msg::MsgStorage;

fn drain(ring: &mut MsgRing<'_>) -> Vec<usize> {
  let mut words = Vec::new();
  while let Some(word) = ring.get() {
    words.push(word);
  }
  words
}

fn assert_indices_in_bounds(ring: &MsgRing<'_>) {
  assert!(ring.len() <= ring.capacity());
  assert!(ring.head() < ring.capacity());
  assert!(ring.tail() < ring.capacity());
}

#[test]
#[should_panic(expected = "non-zero")]
fn zero_capacity_is_rejected() {
  let mut slots: [usize; 0] = [];
  let _ = MsgRing::new(MsgStorage::borrowed(&mut slots));
}

#[test]
fn preserves_fifo_order_across_wraparound() {
  let mut slots = [0_usize; 3];
  let mut ring = MsgRing::new(MsgStorage::borrowed(&mut slots));

  assert!(ring.put(1));
  assert!(ring.put(2));
  assert_eq!(ring.get(), Some(1));
  assert!(ring.put(3));
  assert!(ring.put(4));
  assert!(ring.is_full());
  assert_indices_in_bounds(&ring);

  assert_eq!(drain(&mut ring), [2, 3, 4]);
  assert!(ring.is_empty());
  assert_indices_in_bounds(&ring);
}

#[test]
fn put_on_full_ring_is_rejected_without_change() {
  let mut slots = [0_usize; 2];
  let mut ring = MsgRing::new(MsgStorage::borrowed(&mut slots));
  assert!(ring.put(10));
  assert!(ring.put(20));

  let (head, tail) = (ring.head(), ring.tail());
  assert!(!ring.put(30));
  assert_eq!((ring.head(), ring.tail(), ring.len()), (head, tail, 2));
  assert_eq!(drain(&mut ring), [10, 20]);
}

#[test]
fn get_on_empty_ring_returns_none() {
  let mut slots = [0_usize; 2];
  let mut ring = MsgRing::new(MsgStorage::borrowed(&mut slots));
  assert_eq!(ring.get(), None);
  assert_eq!(ring.space(), 2);
}

#[test]
fn overwrite_drops_oldest_when_full() {
  let mut slots = [0_usize; 3];
  let mut ring = MsgRing::new(MsgStorage::borrowed(&mut slots));

  assert!(!ring.overwrite(1));
  assert!(!ring.overwrite(2));
  assert!(!ring.overwrite(3));
  assert!(ring.overwrite(4));
  assert!(ring.overwrite(5));
  assert_eq!(ring.len(), 3);
  assert_eq!(ring.head(), ring.tail());
  assert_indices_in_bounds(&ring);

  assert_eq!(drain(&mut ring), [3, 4, 5]);
}

#[test]
fn overwrite_with_capacity_one_keeps_latest() {
  let mut slots = [0_usize; 1];
  let mut ring = MsgRing::new(MsgStorage::borrowed(&mut slots));
  for word in 1..=5 {
    ring.overwrite(word);
    assert_indices_in_bounds(&ring);
  }
  assert_eq!(drain(&mut ring), [5]);
}

#[test]
fn clear_resets_indices() {
  let mut slots = [0_usize; 4];
  let mut ring = MsgRing::new(MsgStorage::borrowed(&mut slots));
  ring.put(1);
  ring.put(2);
  ring.get();
  ring.clear();
  assert!(ring.is_empty());
  assert_eq!((ring.head(), ring.tail()), (0, 0));
  assert_eq!(ring.space(), 4);
}

#[test]
fn into_storage_returns_written_slots() {
  let mut slots = [0_usize; 2];
  let mut ring = MsgRing::new(MsgStorage::borrowed(&mut slots));
  ring.put(7);
  let storage = ring.into_storage();
  assert_eq!(storage.as_slice()[0], 7);
}
