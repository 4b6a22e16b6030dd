/// A blocked task registered in a [`WaitList`](super::WaitList).
#[derive(Clone, Debug)]
pub struct WaitEntry<W, I> {
  waiter:   W,
  priority: u8,
  deadline: Option<I>,
}

impl<W, I: Copy + Ord> WaitEntry<W, I> {
  /// Creates an entry.
  #[must_use]
  pub const fn new(waiter: W, priority: u8, deadline: Option<I>) -> Self {
    Self { waiter, priority, deadline }
  }

  /// Returns the registered waiter.
  #[must_use]
  pub const fn waiter(&self) -> &W {
    &self.waiter
  }

  /// Returns the wake priority.
  #[must_use]
  pub const fn priority(&self) -> u8 {
    self.priority
  }

  /// Returns the absolute deadline, if any.
  #[must_use]
  pub const fn deadline(&self) -> Option<I> {
    self.deadline
  }

  /// Indicates whether the deadline is due at `now`.
  #[must_use]
  pub fn is_due(&self, now: I) -> bool {
    self.deadline.is_some_and(|deadline| deadline <= now)
  }

  /// Consumes the entry and returns the waiter.
  #[must_use]
  pub fn into_waiter(self) -> W {
    self.waiter
  }
}
