use alloc::sync::Arc;
use core::{cell::RefCell, marker::PhantomData};

use critical_section::{CriticalSection, Mutex};

use super::{ManualSuspension, ManualTask, TaskScheduler, TaskScratch, WaitDeadline, WaitEntry, WaitRegistry, WakeEvent};
use crate::{
  Word,
  sync::{InterruptContextPolicy, NeverInterruptPolicy, WaitKey},
};


/// Deterministic single-threaded scheduler for tests.
///
/// Time is a `u64` tick counter that only moves through [`advance`](Self::advance). Tasks are
/// plain handles; a test "parks" a task on a key to stand in for a peer that blocked earlier,
/// then observes how the queue resolved it with [`resolution`](Self::resolution).
///
/// [`TaskScheduler::block`] never sleeps. An unresolved wait with a deadline jumps the clock to
/// that deadline and times out; an unresolved wait without a deadline can never complete on a
/// single thread and panics.
pub struct ManualTaskScheduler<P = NeverInterruptPolicy> {
  state:   Arc<Mutex<RefCell<ManualState>>>,
  _policy: PhantomData<fn() -> P>,
}

struct ManualState {
  registry:     WaitRegistry<ManualTask, u64>,
  now:          u64,
  next_task_id: u64,
}

impl<P> ManualTaskScheduler<P> {
  /// Creates a scheduler at tick zero.
  #[must_use]
  pub fn new() -> Self {
    let state = ManualState { registry: WaitRegistry::new(), now: 0, next_task_id: 1 };
    Self { state: Arc::new(Mutex::new(RefCell::new(state))), _policy: PhantomData }
  }

  /// Issues a task handle with the given wake priority.
  #[must_use]
  pub fn task(&self, priority: u8) -> ManualTask {
    critical_section::with(|cs| {
      let mut state = self.state.borrow_ref_mut(cs);
      let id = state.next_task_id;
      state.next_task_id += 1;
      ManualTask::new(id, priority)
    })
  }

  /// Returns the current tick.
  #[must_use]
  pub fn now(&self) -> u64 {
    critical_section::with(|cs| self.state.borrow_ref(cs).now)
  }

  /// Moves the clock forward and times out every waiter whose deadline became due.
  ///
  /// Returns the number of timed-out waiters.
  pub fn advance(&self, ticks: u64) -> usize {
    critical_section::with(|cs| {
      let mut state = self.state.borrow_ref_mut(cs);
      state.now = state.now.saturating_add(ticks);
      let now = state.now;
      state.registry.expire_all(now, |waiter| {
        waiter.cell().resolve(cs, WakeEvent::Timeout);
      })
    })
  }

  /// Returns the number of tasks blocked on `key`.
  #[must_use]
  pub fn waiting(&self, key: WaitKey) -> usize {
    critical_section::with(|cs| self.state.borrow_ref(cs).registry.waiting(key))
  }

  /// Collects the outcome of a resolved wait and returns the task to idle.
  ///
  /// Returns `None` while the task is still blocked.
  #[must_use]
  pub fn resolution(&self, task: &ManualTask) -> Option<(WakeEvent, TaskScratch)> {
    critical_section::with(|cs| {
      if !task.cell().is_resolved(cs) {
        return None;
      }
      let (event, scratch) = task.cell().finish(cs);
      event.map(|event| (event, scratch))
    })
  }

  fn enlist(
    &self,
    cs: CriticalSection<'_>,
    task: &ManualTask,
    key: WaitKey,
    scratch: TaskScratch,
    deadline: Option<u64>,
  ) {
    let mut state = self.state.borrow_ref_mut(cs);
    task.cell().begin_wait(cs, key, scratch);
    if deadline.is_some_and(|at| at <= state.now) {
      task.cell().resolve(cs, WakeEvent::Timeout);
    } else {
      state.registry.enlist(key, WaitEntry::new(task.clone(), task.cell().priority(), deadline));
    }
  }
}

impl<P: InterruptContextPolicy> ManualTaskScheduler<P> {
  /// Registers `task` as blocked on `key`, as if it had called a blocking queue operation.
  pub fn park(&self, task: &ManualTask, key: WaitKey, scratch: TaskScratch, deadline: WaitDeadline<u64, u64>) {
    critical_section::with(|cs| {
      let _suspension = self.suspend(cs, task, key, scratch, deadline);
    });
  }

  /// Parks `task` as a sender blocked with `word` staged.
  pub fn park_sender(&self, task: &ManualTask, key: WaitKey, word: Word) {
    self.park(task, key, TaskScratch::Sending(word), WaitDeadline::Infinite);
  }

  /// Parks `task` as a receiver blocked on an empty queue.
  pub fn park_receiver(&self, task: &ManualTask, key: WaitKey) {
    self.park(task, key, TaskScratch::Receiving, WaitDeadline::Infinite);
  }
}

impl<P> Clone for ManualTaskScheduler<P> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone(), _policy: PhantomData }
  }
}

impl<P> Default for ManualTaskScheduler<P> {
  fn default() -> Self {
    Self::new()
  }
}

impl<P> core::fmt::Debug for ManualTaskScheduler<P> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ManualTaskScheduler").field("now", &self.now()).finish_non_exhaustive()
  }
}

impl<P: InterruptContextPolicy> TaskScheduler for ManualTaskScheduler<P> {
  type Duration = u64;
  type Instant = u64;
  type Interrupt = P;
  type Suspension = ManualSuspension;
  type Task = ManualTask;
  type Waiter = ManualTask;

  fn suspend(
    &self,
    cs: CriticalSection<'_>,
    task: &ManualTask,
    key: WaitKey,
    scratch: TaskScratch,
    deadline: WaitDeadline<u64, u64>,
  ) -> ManualSuspension {
    let now = self.state.borrow_ref(cs).now;
    let deadline = deadline.resolve(now, u64::checked_add);
    self.enlist(cs, task, key, scratch, deadline);
    ManualSuspension::new(task.clone(), deadline)
  }

  fn block(&self, suspension: ManualSuspension) -> (WakeEvent, TaskScratch) {
    let (task, deadline) = suspension.into_parts();
    critical_section::with(|cs| {
      if !task.cell().is_resolved(cs) {
        let Some(at) = deadline else {
          panic!("task {} blocked forever on a manual scheduler", task.id());
        };
        let mut state = self.state.borrow_ref_mut(cs);
        state.now = state.now.max(at);
        let now = state.now;
        state.registry.expire_all(now, |waiter| {
          waiter.cell().resolve(cs, WakeEvent::Timeout);
        });
      }
      let (event, scratch) = task.cell().finish(cs);
      (event.unwrap_or(WakeEvent::Timeout), scratch)
    })
  }

  fn wake_one(&self, cs: CriticalSection<'_>, key: WaitKey, event: WakeEvent) -> Option<ManualTask> {
    let mut state = self.state.borrow_ref_mut(cs);
    let now = state.now;
    state.registry.expire(key, now, |waiter| {
      waiter.cell().resolve(cs, WakeEvent::Timeout);
    });
    let waiter = state.registry.pop_next(key)?;
    waiter.cell().resolve(cs, event);
    Some(waiter)
  }

  fn wake_all(&self, cs: CriticalSection<'_>, key: WaitKey, event: WakeEvent) -> usize {
    self.state.borrow_ref_mut(cs).registry.drain(key, |waiter| {
      waiter.cell().resolve(cs, event);
    })
  }
}
