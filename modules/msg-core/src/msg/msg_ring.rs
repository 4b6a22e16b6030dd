use super::MsgStorage;
use crate::Word;

#[cfg(test)]
mod tests;

/// Fixed-capacity circular buffer of words.
///
/// `head` indexes the oldest message, `tail` the next write position. Both stay in
/// `[0, capacity)`; `count` tells the empty and full states apart when they coincide.
#[derive(Debug)]
pub struct MsgRing<'a> {
  storage: MsgStorage<'a>,
  head:    usize,
  tail:    usize,
  count:   usize,
}

impl<'a> MsgRing<'a> {
  /// Creates an empty ring over the given storage.
  ///
  /// # Panics
  ///
  /// Panics when the storage has no slots.
  #[must_use]
  pub fn new(storage: MsgStorage<'a>) -> Self {
    assert!(storage.capacity() > 0, "message ring capacity must be non-zero");
    Self { storage, head: 0, tail: 0, count: 0 }
  }

  /// Returns the number of slots.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Returns the number of queued messages.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.count
  }

  /// Indicates whether no message is queued.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Indicates whether every slot holds a message.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.count >= self.capacity()
  }

  /// Returns the number of free slots.
  #[must_use]
  pub fn space(&self) -> usize {
    self.capacity() - self.count
  }

  /// Index of the oldest message.
  #[must_use]
  pub const fn head(&self) -> usize {
    self.head
  }

  /// Index of the next write position.
  #[must_use]
  pub const fn tail(&self) -> usize {
    self.tail
  }

  /// Returns the storage backing the ring.
  #[must_use]
  pub const fn storage(&self) -> &MsgStorage<'a> {
    &self.storage
  }

  /// Consumes the ring and returns its storage.
  #[must_use]
  pub fn into_storage(self) -> MsgStorage<'a> {
    self.storage
  }

  /// Removes and returns the oldest message.
  pub fn get(&mut self) -> Option<Word> {
    if self.count == 0 {
      return None;
    }
    let word = self.storage.as_slice()[self.head];
    self.head = self.advance(self.head);
    self.count -= 1;
    Some(word)
  }

  /// Appends a message.
  ///
  /// Returns `false` and leaves the ring untouched when it is full.
  pub fn put(&mut self, word: Word) -> bool {
    if self.is_full() {
      return false;
    }
    self.write_tail(word);
    self.count += 1;
    true
  }

  /// Appends a message, overwriting the oldest one when the ring is full.
  ///
  /// Returns `true` when a message was dropped.
  pub fn overwrite(&mut self, word: Word) -> bool {
    self.write_tail(word);
    self.count += 1;
    if self.count > self.capacity() {
      self.count = self.capacity();
      self.head = self.tail;
      return true;
    }
    false
  }

  /// Discards every queued message.
  pub const fn clear(&mut self) {
    self.head = 0;
    self.tail = 0;
    self.count = 0;
  }

  fn write_tail(&mut self, word: Word) {
    let tail = self.tail;
    self.storage.as_mut_slice()[tail] = word;
    self.tail = self.advance(tail);
  }

  fn advance(&self, index: usize) -> usize {
    let next = index + 1;
    if next == self.capacity() { 0 } else { next }
  }
}
