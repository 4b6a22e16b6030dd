use critical_section::CriticalSection;

use super::{TaskScratch, WaitDeadline, WaitingTask, WakeEvent};
use crate::sync::{InterruptContextPolicy, WaitKey};

/// Scheduler services a message queue suspends and wakes tasks through.
///
/// The queue owns no waiter list: a task blocks against the queue's [`WaitKey`] and the
/// scheduler decides who is woken, in which order, and when a deadline has elapsed.
///
/// Suspension is split in two so the kernel lock is never held while a task is parked:
/// [`suspend`](Self::suspend) registers the caller inside the critical section, then
/// [`block`](Self::block) runs outside it and returns once the task was resolved.
pub trait TaskScheduler {
  /// Handle of the calling task, passed explicitly to blocking operations.
  type Task;
  /// Handle of a task returned by [`wake_one`](Self::wake_one).
  type Waiter: WaitingTask;
  /// Ticket for a registered wait, consumed by [`block`](Self::block).
  type Suspension;
  /// Absolute point in the scheduler's timebase.
  type Instant: Copy + Ord;
  /// Span in the scheduler's timebase.
  type Duration: Copy;
  /// Policy deciding whether the current context may block.
  type Interrupt: InterruptContextPolicy;

  /// Registers `task` as blocked on `key` with its staged scratch slot.
  ///
  /// A deadline that is already due resolves the wait with [`WakeEvent::Timeout`] without
  /// registering it.
  fn suspend(
    &self,
    cs: CriticalSection<'_>,
    task: &Self::Task,
    key: WaitKey,
    scratch: TaskScratch,
    deadline: WaitDeadline<Self::Instant, Self::Duration>,
  ) -> Self::Suspension;

  /// Parks the calling task until its registered wait is resolved or its deadline elapses.
  ///
  /// Must be called outside any critical section. Returns the delivered event together with
  /// the task's scratch slot.
  fn block(&self, suspension: Self::Suspension) -> (WakeEvent, TaskScratch);

  /// Wakes the best-ordered task blocked on `key` with `event`.
  ///
  /// Waiters whose deadline already elapsed are resolved with [`WakeEvent::Timeout`] and are
  /// never selected.
  fn wake_one(&self, cs: CriticalSection<'_>, key: WaitKey, event: WakeEvent) -> Option<Self::Waiter>;

  /// Wakes every task blocked on `key` with `event` and returns how many were woken.
  fn wake_all(&self, cs: CriticalSection<'_>, key: WaitKey, event: WakeEvent) -> usize;
}
