use super::InterruptContextPolicy;
use crate::msg::MsgError;


/// Lets every caller block; for hosted schedulers where each task is a thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverInterruptPolicy;

impl InterruptContextPolicy for NeverInterruptPolicy {
  fn check_blocking_allowed() -> Result<(), MsgError> {
    Ok(())
  }
}
