use critical_section::CriticalSection;

use crate::Word;

/// Access a waking task gets to the scratch slot of the task it woke.
///
/// Only valid while the woken task is known to have been blocked on the same queue, which is
/// the case for handles returned by [`TaskScheduler::wake_one`](super::TaskScheduler::wake_one)
/// inside the critical section that woke them.
pub trait WaitingTask {
  /// Takes the word a blocked sender staged.
  fn take_staged(&self, cs: CriticalSection<'_>) -> Option<Word>;

  /// Delivers a word to a blocked receiver.
  ///
  /// Returns `false` when the task was not waiting to receive.
  fn deliver(&self, cs: CriticalSection<'_>, word: Word) -> bool;
}
