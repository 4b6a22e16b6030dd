mod critical_section_interrupt_policy;
mod never_interrupt_policy;

pub use critical_section_interrupt_policy::CriticalSectionInterruptPolicy;
pub use never_interrupt_policy::NeverInterruptPolicy;

use crate::msg::MsgError;

/// Decides whether the running context may suspend on a message queue.
///
/// Queues consult their scheduler's policy before every `wait*`/`send*` call. Lifecycle
/// operations treat a refusal as a contract violation; `take`, `give` and `push` never ask.
pub trait InterruptContextPolicy {
  /// Reports whether the caller may block.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::InterruptContext`] when the caller runs inside an interrupt handler.
  fn check_blocking_allowed() -> Result<(), MsgError>;
}
