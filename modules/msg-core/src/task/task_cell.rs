use core::{cell::RefCell, fmt};

use critical_section::{CriticalSection, Mutex};

use super::{TaskScratch, TaskWaitState, WaitingTask, WakeEvent};
use crate::{Word, sync::WaitKey};


/// Identity, priority and wait state of a schedulable task.
///
/// The wait state is only reachable with a [`CriticalSection`] token, so a waking task and the
/// task being woken never observe it half-updated.
pub struct TaskCell {
  id:       u64,
  priority: u8,
  state:    Mutex<RefCell<TaskWaitState>>,
}

impl TaskCell {
  /// Creates an idle task cell.
  #[must_use]
  pub const fn new(id: u64, priority: u8) -> Self {
    Self { id, priority, state: Mutex::new(RefCell::new(TaskWaitState::new())) }
  }

  /// Returns the task identifier.
  #[must_use]
  pub const fn id(&self) -> u64 {
    self.id
  }

  /// Returns the wake priority; higher values are woken first.
  #[must_use]
  pub const fn priority(&self) -> u8 {
    self.priority
  }

  /// Runs `f` with exclusive access to the wait state.
  pub fn with_state<R, F>(&self, cs: CriticalSection<'_>, f: F) -> R
  where
    F: FnOnce(&mut TaskWaitState) -> R, {
    let mut state = self.state.borrow_ref_mut(cs);
    f(&mut *state)
  }

  /// Marks the task as waiting on `key`.
  pub fn begin_wait(&self, cs: CriticalSection<'_>, key: WaitKey, scratch: TaskScratch) {
    self.with_state(cs, |state| state.begin(key, scratch));
  }

  /// Records the wakeup event; the first event wins.
  pub fn resolve(&self, cs: CriticalSection<'_>, event: WakeEvent) -> bool {
    self.with_state(cs, |state| state.resolve(event))
  }

  /// Indicates whether a wakeup event was recorded.
  #[must_use]
  pub fn is_resolved(&self, cs: CriticalSection<'_>) -> bool {
    self.with_state(cs, |state| state.is_resolved())
  }

  /// Indicates whether the task is still waiting.
  #[must_use]
  pub fn is_waiting(&self, cs: CriticalSection<'_>) -> bool {
    self.with_state(cs, |state| state.is_waiting())
  }

  /// Ends the wait and returns the recorded event with the scratch slot.
  pub fn finish(&self, cs: CriticalSection<'_>) -> (Option<WakeEvent>, TaskScratch) {
    self.with_state(cs, TaskWaitState::finish)
  }
}

impl WaitingTask for TaskCell {
  fn take_staged(&self, cs: CriticalSection<'_>) -> Option<Word> {
    self.with_state(cs, |state| state.scratch_mut().take_staged())
  }

  fn deliver(&self, cs: CriticalSection<'_>, word: Word) -> bool {
    self.with_state(cs, |state| state.scratch_mut().deliver(word))
  }
}

impl fmt::Debug for TaskCell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TaskCell").field("id", &self.id).field("priority", &self.priority).finish_non_exhaustive()
  }
}
