
/// Deadline strategy of a blocking call.
///
/// `I` is the scheduler's instant type and `D` its duration type; the queue never interprets
/// either, it only forwards them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitDeadline<I, D> {
  /// Give up at an absolute instant.
  Until(I),
  /// Give up after a delay measured from the call.
  For(D),
  /// Wait until woken.
  Infinite,
}

impl<I, D> WaitDeadline<I, D> {
  /// Resolves the deadline to an absolute instant.
  ///
  /// `offset` adds a delay to `now`; returning `None` (overflow) resolves to no deadline.
  pub fn resolve<F>(self, now: I, offset: F) -> Option<I>
  where
    F: FnOnce(I, D) -> Option<I>, {
    match self {
      | Self::Until(at) => Some(at),
      | Self::For(delay) => offset(now, delay),
      | Self::Infinite => None,
    }
  }
}
