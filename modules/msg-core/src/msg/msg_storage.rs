#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec};

use crate::Word;


/// Slot buffer backing a message queue, tagged with who owns it.
///
/// Borrowed storage stays with the caller and is handed back when the queue is dropped.
/// Owned storage is allocated by the queue itself and freed with it.
#[derive(Debug)]
pub enum MsgStorage<'a> {
  /// Caller-supplied slots.
  Borrowed(&'a mut [Word]),
  /// Slots allocated for the queue.
  #[cfg(feature = "alloc")]
  Owned(Box<[Word]>),
}

impl<'a> MsgStorage<'a> {
  /// Wraps a caller-supplied buffer.
  #[must_use]
  pub const fn borrowed(slots: &'a mut [Word]) -> Self {
    Self::Borrowed(slots)
  }

  /// Returns the number of slots.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.as_slice().len()
  }

  /// Indicates whether the storage is owned by the queue.
  #[must_use]
  pub const fn is_owned(&self) -> bool {
    match self {
      | Self::Borrowed(_) => false,
      #[cfg(feature = "alloc")]
      | Self::Owned(_) => true,
    }
  }

  /// Returns the slots.
  #[must_use]
  pub fn as_slice(&self) -> &[Word] {
    match self {
      | Self::Borrowed(slots) => slots,
      #[cfg(feature = "alloc")]
      | Self::Owned(slots) => slots,
    }
  }

  /// Returns the slots mutably.
  pub fn as_mut_slice(&mut self) -> &mut [Word] {
    match self {
      | Self::Borrowed(slots) => slots,
      #[cfg(feature = "alloc")]
      | Self::Owned(slots) => slots,
    }
  }
}

#[cfg(feature = "alloc")]
impl MsgStorage<'static> {
  /// Allocates `capacity` zeroed slots.
  ///
  /// Allocation failure aborts through the global allocator's error handler.
  #[must_use]
  pub fn owned(capacity: usize) -> Self {
    Self::Owned(vec![0; capacity].into_boxed_slice())
  }
}
