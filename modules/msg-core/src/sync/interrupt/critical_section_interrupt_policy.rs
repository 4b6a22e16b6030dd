use super::InterruptContextPolicy;
use crate::msg::MsgError;

/// Refuses to block while an exception handler is active on the current core.
///
/// With `interrupt-cortex-m` the active vector is read from the SCB; thread mode is the only
/// context allowed to suspend. Other targets have no way to tell and always allow blocking.
#[derive(Clone, Copy, Debug, Default)]
pub struct CriticalSectionInterruptPolicy;

#[cfg(feature = "interrupt-cortex-m")]
impl InterruptContextPolicy for CriticalSectionInterruptPolicy {
  fn check_blocking_allowed() -> Result<(), MsgError> {
    use cortex_m::peripheral::{SCB, scb::VectActive};

    match SCB::vect_active() {
      | VectActive::ThreadMode => Ok(()),
      | _ => Err(MsgError::InterruptContext),
    }
  }
}

#[cfg(not(feature = "interrupt-cortex-m"))]
impl InterruptContextPolicy for CriticalSectionInterruptPolicy {
  fn check_blocking_allowed() -> Result<(), MsgError> {
    Ok(())
  }
}
