use alloc::sync::Arc;

use critical_section::CriticalSection;

use super::{TaskCell, WaitingTask};
use crate::Word;

/// Task handle issued by [`ManualTaskScheduler`](super::ManualTaskScheduler).
///
/// Clones share the same cell, so a test keeps one clone while the scheduler holds another.
#[derive(Clone, Debug)]
pub struct ManualTask {
  cell: Arc<TaskCell>,
}

impl ManualTask {
  pub(crate) fn new(id: u64, priority: u8) -> Self {
    Self { cell: Arc::new(TaskCell::new(id, priority)) }
  }

  /// Returns the underlying cell.
  #[must_use]
  pub fn cell(&self) -> &TaskCell {
    &self.cell
  }

  /// Returns the task identifier.
  #[must_use]
  pub fn id(&self) -> u64 {
    self.cell.id()
  }

  /// Indicates whether both handles refer to the same task.
  #[must_use]
  pub fn same_task(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.cell, &other.cell)
  }
}

impl WaitingTask for ManualTask {
  fn take_staged(&self, cs: CriticalSection<'_>) -> Option<Word> {
    self.cell.take_staged(cs)
  }

  fn deliver(&self, cs: CriticalSection<'_>, word: Word) -> bool {
    self.cell.deliver(cs, word)
  }
}
