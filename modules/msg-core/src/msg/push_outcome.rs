/// What a lossy push did with the pushed word.
///
/// Never represents a failure: a push always stores the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The word was appended to the ring buffer.
  Enqueued,
  /// The word was appended and a blocked receiver was served with the oldest message.
  Delivered,
  /// The buffer was full; the word overwrote the oldest message.
  DroppedOldest,
}

impl From<&PushOutcome> for &'static str {
  fn from(outcome: &PushOutcome) -> Self {
    match outcome {
      | PushOutcome::Enqueued => "enqueue",
      | PushOutcome::Delivered => "deliver",
      | PushOutcome::DroppedOldest => "drop_oldest",
    }
  }
}
