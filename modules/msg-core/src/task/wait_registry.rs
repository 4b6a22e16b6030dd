use ahash::RandomState;
use hashbrown::HashMap;

use super::{WaitEntry, WaitList};
use crate::sync::WaitKey;


/// Wait lists of every blocking object known to a scheduler, indexed by [`WaitKey`].
///
/// Empty lists are dropped eagerly so the registry only holds keys with blocked tasks.
#[derive(Debug)]
pub struct WaitRegistry<W, I> {
  lists: HashMap<WaitKey, WaitList<W, I>, RandomState>,
}

impl<W, I: Copy + Ord> WaitRegistry<W, I> {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { lists: HashMap::with_hasher(RandomState::new()) }
  }

  /// Registers a waiter on `key`.
  pub fn enlist(&mut self, key: WaitKey, entry: WaitEntry<W, I>) {
    self.lists.entry(key).or_default().insert(entry);
  }

  /// Removes the waiters on `key` whose deadline is due at `now`.
  pub fn expire<F>(&mut self, key: WaitKey, now: I, f: F) -> usize
  where
    F: FnMut(W), {
    let Some(list) = self.lists.get_mut(&key) else {
      return 0;
    };
    let expired = list.expire(now, f);
    if list.is_empty() {
      self.lists.remove(&key);
    }
    expired
  }

  /// Removes every waiter whose deadline is due at `now`, across all keys.
  pub fn expire_all<F>(&mut self, now: I, mut f: F) -> usize
  where
    F: FnMut(W), {
    let mut expired = 0;
    self.lists.retain(|_, list| {
      expired += list.expire(now, &mut f);
      !list.is_empty()
    });
    expired
  }

  /// Removes the next waiter to wake on `key`.
  pub fn pop_next(&mut self, key: WaitKey) -> Option<W> {
    let list = self.lists.get_mut(&key)?;
    let entry = list.pop_front();
    if list.is_empty() {
      self.lists.remove(&key);
    }
    entry.map(WaitEntry::into_waiter)
  }

  /// Removes the first waiter on `key` matching `predicate`.
  pub fn remove<P>(&mut self, key: WaitKey, predicate: P) -> Option<W>
  where
    P: FnMut(&W) -> bool, {
    let list = self.lists.get_mut(&key)?;
    let removed = list.remove_first(predicate);
    if list.is_empty() {
      self.lists.remove(&key);
    }
    removed
  }

  /// Removes every waiter on `key` in wake order.
  pub fn drain<F>(&mut self, key: WaitKey, f: F) -> usize
  where
    F: FnMut(W), {
    self.lists.remove(&key).map_or(0, |mut list| list.drain_each(f))
  }

  /// Returns the number of waiters on `key`.
  #[must_use]
  pub fn waiting(&self, key: WaitKey) -> usize {
    self.lists.get(&key).map_or(0, WaitList::len)
  }

  /// Returns the number of waiters across all keys.
  #[must_use]
  pub fn total(&self) -> usize {
    self.lists.values().map(WaitList::len).sum()
  }
}

impl<W, I: Copy + Ord> Default for WaitRegistry<W, I> {
  fn default() -> Self {
    Self::new()
  }
}
