use std::{
  cell::RefCell,
  fmt,
  sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
  },
  thread,
  time::{Duration, Instant},
};

use critical_section::{CriticalSection, Mutex};
use rtmsg_core_rs::{
  sync::{NeverInterruptPolicy, WaitKey},
  task::{TaskScheduler, TaskScratch, WaitDeadline, WaitEntry, WaitRegistry, WakeEvent},
};
use tracing::trace;

use crate::{StdSuspension, StdTask, StdTaskConfig};

#[cfg(test)]
mod tests;

const TARGET: &str = "rtmsg::scheduler";

/// Scheduler that runs each task on its own OS thread.
///
/// Blocked tasks are kept in a [`WaitRegistry`] behind the kernel critical section, ordered
/// by priority and then by arrival. A blocked thread parks with
/// [`thread::park_timeout`] until it is resolved or its deadline passes; a thread that times
/// out removes itself from the registry. Clones share the same registry.
#[derive(Clone)]
pub struct StdTaskScheduler {
  inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
  registry:     Mutex<RefCell<WaitRegistry<StdTask, Instant>>>,
  next_task_id: AtomicU64,
}

impl StdTaskScheduler {
  /// Creates a scheduler without tasks.
  #[must_use]
  pub fn new() -> Self {
    let inner =
      SchedulerInner { registry: Mutex::new(RefCell::new(WaitRegistry::new())), next_task_id: AtomicU64::new(1) };
    Self { inner: Arc::new(inner) }
  }

  /// Binds the calling thread as a task.
  #[must_use]
  pub fn task(&self, config: &StdTaskConfig) -> StdTask {
    let id = self.inner.next_task_id.fetch_add(1, Ordering::Relaxed);
    let task = StdTask::bind_current(id, config);
    trace!(target: TARGET, task = id, priority = config.priority(), name = config.name(), "task bound");
    task
  }

  /// Returns the number of tasks blocked on `key`.
  #[must_use]
  pub fn waiting(&self, key: WaitKey) -> usize {
    critical_section::with(|cs| self.inner.registry.borrow_ref(cs).waiting(key))
  }

  /// Returns the number of blocked tasks across all keys.
  #[must_use]
  pub fn blocked(&self) -> usize {
    critical_section::with(|cs| self.inner.registry.borrow_ref(cs).total())
  }

  fn park_until_resolved(task: &StdTask, deadline: Option<Instant>) {
    while !critical_section::with(|cs| task.cell().is_resolved(cs)) {
      match deadline {
        | None => thread::park(),
        | Some(at) => {
          let now = Instant::now();
          if now >= at {
            return;
          }
          thread::park_timeout(at - now);
        },
      }
    }
  }
}

impl Default for StdTaskScheduler {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for StdTaskScheduler {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StdTaskScheduler").field("blocked", &self.blocked()).finish_non_exhaustive()
  }
}

impl TaskScheduler for StdTaskScheduler {
  type Duration = Duration;
  type Instant = Instant;
  type Interrupt = NeverInterruptPolicy;
  type Suspension = StdSuspension;
  type Task = StdTask;
  type Waiter = StdTask;

  fn suspend(
    &self,
    cs: CriticalSection<'_>,
    task: &StdTask,
    key: WaitKey,
    scratch: TaskScratch,
    deadline: WaitDeadline<Instant, Duration>,
  ) -> StdSuspension {
    debug_assert_eq!(task.thread().id(), thread::current().id(), "task {} used off its own thread", task.id());
    let now = Instant::now();
    let deadline = deadline.resolve(now, |at, delay| at.checked_add(delay));
    task.cell().begin_wait(cs, key, scratch);
    if deadline.is_some_and(|at| at <= now) {
      task.cell().resolve(cs, WakeEvent::Timeout);
    } else {
      let entry = WaitEntry::new(task.clone(), task.priority(), deadline);
      self.inner.registry.borrow_ref_mut(cs).enlist(key, entry);
      trace!(target: TARGET, task = task.id(), key = key.into_raw(), "task suspended");
    }
    StdSuspension::new(task.clone(), key, deadline)
  }

  fn block(&self, suspension: StdSuspension) -> (WakeEvent, TaskScratch) {
    let (task, key, deadline) = suspension.into_parts();
    Self::park_until_resolved(&task, deadline);
    let (event, scratch) = critical_section::with(|cs| {
      if !task.cell().is_resolved(cs) {
        self.inner.registry.borrow_ref_mut(cs).remove(key, |waiter| waiter.same_task(&task));
        task.cell().resolve(cs, WakeEvent::Timeout);
      }
      task.cell().finish(cs)
    });
    let event = event.unwrap_or(WakeEvent::Timeout);
    trace!(target: TARGET, task = task.id(), key = key.into_raw(), event = ?event, "task resumed");
    (event, scratch)
  }

  fn wake_one(&self, cs: CriticalSection<'_>, key: WaitKey, event: WakeEvent) -> Option<StdTask> {
    let mut registry = self.inner.registry.borrow_ref_mut(cs);
    registry.expire(key, Instant::now(), |waiter| waiter.wake(cs, WakeEvent::Timeout));
    let waiter = registry.pop_next(key)?;
    waiter.wake(cs, event);
    Some(waiter)
  }

  fn wake_all(&self, cs: CriticalSection<'_>, key: WaitKey, event: WakeEvent) -> usize {
    let woken = self.inner.registry.borrow_ref_mut(cs).drain(key, |waiter| waiter.wake(cs, event));
    trace!(target: TARGET, key = key.into_raw(), woken, event = ?event, "tasks woken");
    woken
  }
}
