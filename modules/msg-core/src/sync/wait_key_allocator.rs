use portable_atomic::{AtomicU64, Ordering};

use super::WaitKey;

#[cfg(test)]
mod tests;

/// Allocator for generating [`WaitKey`] values.
///
/// Backed by `portable-atomic`, so targets without native 64-bit atomics fall back to the
/// kernel critical section.
#[derive(Debug)]
pub struct WaitKeyAllocator {
  counter: AtomicU64,
}

impl WaitKeyAllocator {
  /// Creates a new allocator.
  #[must_use]
  #[inline]
  pub const fn new() -> Self {
    Self { counter: AtomicU64::new(1) }
  }

  /// Issues a new unique key.
  #[inline]
  pub fn allocate(&self) -> WaitKey {
    let key = WaitKey::from_raw(self.counter.fetch_add(1, Ordering::Relaxed));
    if key.is_valid() {
      return key;
    }
    // counter wrapped past u64::MAX
    WaitKey::from_raw(self.counter.fetch_add(1, Ordering::Relaxed))
  }
}

impl Default for WaitKeyAllocator {
  fn default() -> Self {
    Self::new()
  }
}
