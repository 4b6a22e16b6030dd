use std::time::Instant;

use rtmsg_core_rs::sync::WaitKey;

use crate::StdTask;

/// Registered wait of a thread-backed task.
#[derive(Debug)]
pub struct StdSuspension {
  task:     StdTask,
  key:      WaitKey,
  deadline: Option<Instant>,
}

impl StdSuspension {
  pub(crate) const fn new(task: StdTask, key: WaitKey, deadline: Option<Instant>) -> Self {
    Self { task, key, deadline }
  }

  /// Returns the absolute deadline, if any.
  #[must_use]
  pub const fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  pub(crate) fn into_parts(self) -> (StdTask, WaitKey, Option<Instant>) {
    (self.task, self.key, self.deadline)
  }
}
