use core::fmt;

#[cfg(test)]
mod tests;

/// Rendezvous token tasks block on.
///
/// Every message queue owns one key for its whole lifetime; schedulers index their wait
/// lists by it. Keys are issued by [`WaitKeyAllocator`](super::WaitKeyAllocator) and never
/// reuse the raw value `0`, which is reserved as the invalid key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WaitKey(u64);

impl WaitKey {
  /// Creates a key from its raw representation.
  #[must_use]
  pub const fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  /// Returns the raw representation.
  #[must_use]
  pub const fn into_raw(self) -> u64 {
    self.0
  }

  /// Indicates whether the key was issued by an allocator.
  #[must_use]
  pub const fn is_valid(self) -> bool {
    self.0 != 0
  }
}

impl fmt::Display for WaitKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "wait-key#{}", self.0)
  }
}
