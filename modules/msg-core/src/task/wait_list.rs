use alloc::vec::Vec;

use super::WaitEntry;


/// Tasks blocked on one wait key, kept in wake order.
///
/// Entries are ordered by descending priority and by arrival among equal priorities, so the
/// front entry is always the next one to wake.
#[derive(Debug)]
pub struct WaitList<W, I> {
  entries: Vec<WaitEntry<W, I>>,
}

impl<W, I: Copy + Ord> WaitList<W, I> {
  /// Creates an empty list.
  #[must_use]
  pub const fn new() -> Self {
    Self { entries: Vec::new() }
  }

  /// Returns the number of registered waiters.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Indicates whether no waiter is registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Registers a waiter behind every entry of the same or higher priority.
  pub fn insert(&mut self, entry: WaitEntry<W, I>) {
    let index =
      self.entries.iter().position(|queued| queued.priority() < entry.priority()).unwrap_or(self.entries.len());
    self.entries.insert(index, entry);
  }

  /// Removes the next waiter to wake.
  pub fn pop_front(&mut self) -> Option<WaitEntry<W, I>> {
    if self.entries.is_empty() { None } else { Some(self.entries.remove(0)) }
  }

  /// Removes every waiter whose deadline is due at `now`, in wake order.
  ///
  /// Returns the number of removed waiters.
  pub fn expire<F>(&mut self, now: I, mut f: F) -> usize
  where
    F: FnMut(W), {
    let mut expired = 0;
    let mut index = 0;
    while index < self.entries.len() {
      if self.entries[index].is_due(now) {
        f(self.entries.remove(index).into_waiter());
        expired += 1;
      } else {
        index += 1;
      }
    }
    expired
  }

  /// Removes the first waiter matching `predicate`.
  pub fn remove_first<P>(&mut self, mut predicate: P) -> Option<W>
  where
    P: FnMut(&W) -> bool, {
    let index = self.entries.iter().position(|entry| predicate(entry.waiter()))?;
    Some(self.entries.remove(index).into_waiter())
  }

  /// Removes every waiter in wake order and returns how many were removed.
  pub fn drain_each<F>(&mut self, f: F) -> usize
  where
    F: FnMut(W), {
    let drained = self.entries.len();
    self.entries.drain(..).map(WaitEntry::into_waiter).for_each(f);
    drained
  }
}

impl<W, I: Copy + Ord> Default for WaitList<W, I> {
  fn default() -> Self {
    Self::new()
  }
}
