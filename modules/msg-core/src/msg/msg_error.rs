//! Errors reported by message queue operations.

use core::{error::Error, fmt};


/// Failure outcomes of a message queue operation.
///
/// A successful transfer is reported as `Ok`; an operation that fails transfers nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MsgError {
  /// No message or no free slot was available, and for blocking calls the deadline elapsed.
  Timeout,
  /// The queue was killed or deleted while the caller was blocked on it.
  Stopped,
  /// A blocking operation was attempted from an interrupt handler.
  InterruptContext,
}

impl MsgError {
  /// Returns a short identifier suitable for structured logging.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      | Self::Timeout => "timeout",
      | Self::Stopped => "stopped",
      | Self::InterruptContext => "interrupt_context",
    }
  }
}

impl fmt::Display for MsgError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Timeout => write!(f, "message queue operation timed out"),
      | Self::Stopped => write!(f, "message queue was stopped while waiting"),
      | Self::InterruptContext => write!(f, "blocking message queue operation called from interrupt context"),
    }
  }
}

impl Error for MsgError {}
