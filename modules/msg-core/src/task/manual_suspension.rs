use super::ManualTask;

/// Registered wait returned by [`ManualTaskScheduler::suspend`](super::TaskScheduler::suspend).
#[derive(Debug)]
pub struct ManualSuspension {
  task:     ManualTask,
  deadline: Option<u64>,
}

impl ManualSuspension {
  pub(crate) const fn new(task: ManualTask, deadline: Option<u64>) -> Self {
    Self { task, deadline }
  }

  /// Returns the suspended task.
  #[must_use]
  pub const fn task(&self) -> &ManualTask {
    &self.task
  }

  /// Returns the absolute deadline tick, if any.
  #[must_use]
  pub const fn deadline(&self) -> Option<u64> {
    self.deadline
  }

  pub(crate) fn into_parts(self) -> (ManualTask, Option<u64>) {
    (self.task, self.deadline)
  }
}
