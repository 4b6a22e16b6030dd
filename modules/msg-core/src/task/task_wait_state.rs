use core::mem;

use super::{TaskScratch, WakeEvent};
use crate::sync::WaitKey;

/// Wait bookkeeping of a single task.
///
/// Lives behind the kernel lock inside a [`TaskCell`](super::TaskCell). A task is waiting
/// from [`begin`](Self::begin) until it is resolved with an event; [`finish`](Self::finish)
/// collects the outcome and returns the task to the idle state.
#[derive(Debug, Default)]
pub struct TaskWaitState {
  key:     Option<WaitKey>,
  scratch: TaskScratch,
  event:   Option<WakeEvent>,
}

impl TaskWaitState {
  /// Creates an idle state.
  #[must_use]
  pub const fn new() -> Self {
    Self { key: None, scratch: TaskScratch::Idle, event: None }
  }

  /// Marks the task as waiting on `key` with the given staged slot.
  pub const fn begin(&mut self, key: WaitKey, scratch: TaskScratch) {
    self.key = Some(key);
    self.scratch = scratch;
    self.event = None;
  }

  /// Records the wakeup event.
  ///
  /// Returns `false` when the task is not waiting or already resolved; the first event wins.
  pub const fn resolve(&mut self, event: WakeEvent) -> bool {
    if self.key.is_none() || self.event.is_some() {
      return false;
    }
    self.event = Some(event);
    true
  }

  /// Indicates whether the task is waiting and not yet resolved.
  #[must_use]
  pub const fn is_waiting(&self) -> bool {
    self.key.is_some() && self.event.is_none()
  }

  /// Indicates whether an event was recorded.
  #[must_use]
  pub const fn is_resolved(&self) -> bool {
    self.event.is_some()
  }

  /// Returns the key the task waits on.
  #[must_use]
  pub const fn key(&self) -> Option<WaitKey> {
    self.key
  }

  /// Returns the staged slot.
  pub const fn scratch_mut(&mut self) -> &mut TaskScratch {
    &mut self.scratch
  }

  /// Ends the wait and returns the recorded event with the scratch slot.
  pub fn finish(&mut self) -> (Option<WakeEvent>, TaskScratch) {
    self.key = None;
    (self.event.take(), mem::take(&mut self.scratch))
  }
}
