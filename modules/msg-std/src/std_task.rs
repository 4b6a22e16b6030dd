use std::{
  fmt,
  sync::Arc,
  thread::{self, Thread},
};

use critical_section::CriticalSection;
use rtmsg_core_rs::{
  Word,
  task::{TaskCell, WaitingTask, WakeEvent},
};

use crate::StdTaskConfig;

/// A thread acting as a kernel task.
///
/// Cheap to clone; clones refer to the same task. Blocking calls made with this handle must
/// run on the thread it was bound to.
#[derive(Clone)]
pub struct StdTask {
  inner: Arc<StdTaskInner>,
}

struct StdTaskInner {
  cell:   TaskCell,
  thread: Thread,
  name:   Option<String>,
}

impl StdTask {
  pub(crate) fn bind_current(id: u64, config: &StdTaskConfig) -> Self {
    let inner = StdTaskInner {
      cell:   TaskCell::new(id, config.priority()),
      thread: thread::current(),
      name:   config.name().map(str::to_owned),
    };
    Self { inner: Arc::new(inner) }
  }

  /// Returns the task identifier.
  #[must_use]
  pub fn id(&self) -> u64 {
    self.inner.cell.id()
  }

  /// Returns the wake priority.
  #[must_use]
  pub fn priority(&self) -> u8 {
    self.inner.cell.priority()
  }

  /// Returns the configured name.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.inner.name.as_deref()
  }

  /// Returns the thread the task is bound to.
  #[must_use]
  pub fn thread(&self) -> &Thread {
    &self.inner.thread
  }

  /// Indicates whether both handles refer to the same task.
  #[must_use]
  pub fn same_task(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }

  pub(crate) fn cell(&self) -> &TaskCell {
    &self.inner.cell
  }

  pub(crate) fn wake(&self, cs: CriticalSection<'_>, event: WakeEvent) {
    if self.inner.cell.resolve(cs, event) {
      self.inner.thread.unpark();
    }
  }
}

impl WaitingTask for StdTask {
  fn take_staged(&self, cs: CriticalSection<'_>) -> Option<Word> {
    self.inner.cell.take_staged(cs)
  }

  fn deliver(&self, cs: CriticalSection<'_>, word: Word) -> bool {
    self.inner.cell.deliver(cs, word)
  }
}

impl fmt::Debug for StdTask {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StdTask")
      .field("id", &self.id())
      .field("priority", &self.priority())
      .field("name", &self.name())
      .finish()
  }
}
