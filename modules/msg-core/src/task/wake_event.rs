use crate::msg::MsgError;


/// Result code delivered to a task together with its wakeup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WakeEvent {
  /// The awaited transfer completed.
  Success,
  /// The deadline elapsed first.
  Timeout,
  /// The object the task waited on was killed or deleted.
  Stopped,
}

impl WakeEvent {
  /// Converts the event into the result reported to the queue caller.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::Timeout`] or [`MsgError::Stopped`] for the corresponding events.
  pub const fn into_result(self) -> Result<(), MsgError> {
    match self {
      | Self::Success => Ok(()),
      | Self::Timeout => Err(MsgError::Timeout),
      | Self::Stopped => Err(MsgError::Stopped),
    }
  }

  /// Indicates whether the event reports a completed transfer.
  #[must_use]
  pub const fn is_success(self) -> bool {
    matches!(self, Self::Success)
  }
}
