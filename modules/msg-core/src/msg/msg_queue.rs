use core::{cell::RefCell, fmt, ops::ControlFlow};

use critical_section::{CriticalSection, Mutex};
use tracing::{debug, trace};

use super::{MsgError, MsgRing, MsgStorage, PushOutcome};
use crate::{
  Word,
  sync::{InterruptContextPolicy, WaitKey, WaitKeyAllocator},
  task::{TaskScheduler, TaskScratch, WaitDeadline, WaitingTask, WakeEvent},
};


const TARGET: &str = "rtmsg::queue";

static WAIT_KEYS: WaitKeyAllocator = WaitKeyAllocator::new();

/// Bounded FIFO mailbox of word-sized messages.
///
/// The ring buffer is the canonical order for buffered messages. When a peer is already
/// blocked, a transfer completes through the peer's scratch slot instead, so a completed
/// rendezvous never occupies two slots.
///
/// Every operation runs under the kernel critical section. Blocked tasks are tracked by the
/// scheduler `S` against the queue's [`WaitKey`]; the queue itself holds no task references.
pub struct MsgQueue<'a, S: TaskScheduler> {
  key:       WaitKey,
  scheduler: S,
  ring:      Mutex<RefCell<MsgRing<'a>>>,
}

impl<'a, S: TaskScheduler> MsgQueue<'a, S> {
  /// Creates an empty queue over caller-supplied slots.
  ///
  /// The capacity is the slice length. The slots are handed back when the queue is dropped.
  ///
  /// # Panics
  ///
  /// Panics when `slots` is empty or when called from an interrupt handler.
  #[must_use]
  pub fn init(slots: &'a mut [Word], scheduler: S) -> Self {
    Self::with_storage(MsgStorage::borrowed(slots), scheduler)
  }

  fn with_storage(storage: MsgStorage<'a>, scheduler: S) -> Self {
    Self::assert_task_context();
    let ring = MsgRing::new(storage);
    let key = WAIT_KEYS.allocate();
    debug!(
      target: TARGET,
      key = key.into_raw(),
      capacity = ring.capacity(),
      owned = ring.storage().is_owned(),
      "message queue initialised"
    );
    Self { key, scheduler, ring: Mutex::new(RefCell::new(ring)) }
  }

  fn assert_task_context() {
    assert!(
      <S::Interrupt as InterruptContextPolicy>::check_blocking_allowed().is_ok(),
      "message queue lifecycle operation called from interrupt context"
    );
  }

  /// Empties the queue and aborts every task blocked on it.
  ///
  /// Blocked senders and receivers resume with [`MsgError::Stopped`]. Storage is kept and the
  /// queue stays usable. Returns the number of aborted tasks.
  ///
  /// # Panics
  ///
  /// Panics when called from an interrupt handler.
  pub fn kill(&self) -> usize {
    Self::assert_task_context();
    let aborted = critical_section::with(|cs| {
      self.ring.borrow_ref_mut(cs).clear();
      self.scheduler.wake_all(cs, self.key, WakeEvent::Stopped)
    });
    debug!(target: TARGET, key = self.key.into_raw(), aborted, "message queue killed");
    aborted
  }

  /// Kills the queue and releases it together with self-owned storage.
  ///
  /// # Panics
  ///
  /// Panics when called from an interrupt handler.
  pub fn delete(self) {
    let aborted = self.kill();
    let owned = self.is_self_owned();
    debug!(target: TARGET, key = self.key.into_raw(), aborted, owned, "message queue deleted");
  }

  /// Removes the oldest message without blocking.
  ///
  /// When a sender is blocked on a full queue, its staged message takes the freed slot and
  /// the sender is released. Safe to call from interrupt handlers.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::Timeout`] when the queue is empty.
  pub fn take(&self) -> Result<Word, MsgError> {
    critical_section::with(|cs| self.receive_ready(cs)).ok_or(MsgError::Timeout)
  }

  /// Appends a message without blocking.
  ///
  /// When a receiver is blocked on an empty queue, it is handed the oldest message
  /// directly. Safe to call from interrupt handlers.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::Timeout`] and leaves the queue untouched when it is full.
  pub fn give(&self, word: Word) -> Result<(), MsgError> {
    if critical_section::with(|cs| self.send_ready(cs, word)) { Ok(()) } else { Err(MsgError::Timeout) }
  }

  /// Appends a message unconditionally, overwriting the oldest one when the queue is full.
  ///
  /// The word is always enqueued first. Only when that did not drop a message is one blocked
  /// receiver served with the oldest message. Never blocks and never fails; safe to call from
  /// interrupt handlers.
  pub fn push(&self, word: Word) -> PushOutcome {
    let outcome = critical_section::with(|cs| {
      let mut ring = self.ring.borrow_ref_mut(cs);
      if ring.overwrite(word) {
        PushOutcome::DroppedOldest
      } else if self.serve_receiver(cs, &mut ring) {
        PushOutcome::Delivered
      } else {
        PushOutcome::Enqueued
      }
    });
    trace!(target: TARGET, key = self.key.into_raw(), word, outcome = <&str>::from(&outcome), "message pushed");
    outcome
  }

  /// Receives a message, blocking until `deadline` at the latest.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::Timeout`] when the deadline elapsed first (including a deadline
  /// that already passed), [`MsgError::Stopped`] when the queue was killed while waiting and
  /// [`MsgError::InterruptContext`] when called from an interrupt handler.
  pub fn wait_until(&self, task: &S::Task, deadline: S::Instant) -> Result<Word, MsgError> {
    self.wait_with(task, WaitDeadline::Until(deadline))
  }

  /// Receives a message, blocking for at most `delay`.
  ///
  /// # Errors
  ///
  /// Same as [`wait_until`](Self::wait_until).
  pub fn wait_for(&self, task: &S::Task, delay: S::Duration) -> Result<Word, MsgError> {
    self.wait_with(task, WaitDeadline::For(delay))
  }

  /// Receives a message, blocking until one arrives.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::Stopped`] when the queue was killed while waiting and
  /// [`MsgError::InterruptContext`] when called from an interrupt handler.
  pub fn wait(&self, task: &S::Task) -> Result<Word, MsgError> {
    self.wait_with(task, WaitDeadline::Infinite)
  }

  /// Sends a message, blocking until `deadline` at the latest while the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::Timeout`] when the deadline elapsed first, [`MsgError::Stopped`]
  /// when the queue was killed while waiting and [`MsgError::InterruptContext`] when called
  /// from an interrupt handler. The message was not transferred in any of these cases.
  pub fn send_until(&self, task: &S::Task, word: Word, deadline: S::Instant) -> Result<(), MsgError> {
    self.send_with(task, word, WaitDeadline::Until(deadline))
  }

  /// Sends a message, blocking for at most `delay` while the queue is full.
  ///
  /// # Errors
  ///
  /// Same as [`send_until`](Self::send_until).
  pub fn send_for(&self, task: &S::Task, word: Word, delay: S::Duration) -> Result<(), MsgError> {
    self.send_with(task, word, WaitDeadline::For(delay))
  }

  /// Sends a message, blocking until a slot frees up.
  ///
  /// # Errors
  ///
  /// Returns [`MsgError::Stopped`] when the queue was killed while waiting and
  /// [`MsgError::InterruptContext`] when called from an interrupt handler.
  pub fn send(&self, task: &S::Task, word: Word) -> Result<(), MsgError> {
    self.send_with(task, word, WaitDeadline::Infinite)
  }

  /// Returns the number of queued messages.
  #[must_use]
  pub fn count(&self) -> usize {
    critical_section::with(|cs| self.ring.borrow_ref(cs).len())
  }

  /// Returns the number of free slots.
  #[must_use]
  pub fn space(&self) -> usize {
    critical_section::with(|cs| self.ring.borrow_ref(cs).space())
  }

  /// Returns the capacity.
  #[must_use]
  pub fn limit(&self) -> usize {
    critical_section::with(|cs| self.ring.borrow_ref(cs).capacity())
  }

  /// Indicates whether no message is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.count() == 0
  }

  /// Indicates whether every slot holds a message.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.space() == 0
  }

  /// Returns the key tasks block on.
  #[must_use]
  pub const fn key(&self) -> WaitKey {
    self.key
  }

  /// Indicates whether the queue allocated its own storage.
  #[must_use]
  pub fn is_self_owned(&self) -> bool {
    critical_section::with(|cs| self.ring.borrow_ref(cs).storage().is_owned())
  }

  /// Returns the scheduler the queue suspends tasks through.
  #[must_use]
  pub const fn scheduler(&self) -> &S {
    &self.scheduler
  }

  fn wait_with(&self, task: &S::Task, deadline: WaitDeadline<S::Instant, S::Duration>) -> Result<Word, MsgError> {
    <S::Interrupt as InterruptContextPolicy>::check_blocking_allowed()?;
    let flow = critical_section::with(|cs| match self.receive_ready(cs) {
      | Some(word) => ControlFlow::Break(word),
      | None => ControlFlow::Continue(self.scheduler.suspend(cs, task, self.key, TaskScratch::Receiving, deadline)),
    });
    let suspension = match flow {
      | ControlFlow::Break(word) => return Ok(word),
      | ControlFlow::Continue(suspension) => suspension,
    };
    trace!(target: TARGET, key = self.key.into_raw(), "receiver suspended");
    let (event, scratch) = self.scheduler.block(suspension);
    trace!(target: TARGET, key = self.key.into_raw(), event = ?event, "receiver resumed");
    event.into_result()?;
    scratch.received().ok_or(MsgError::Timeout)
  }

  fn send_with(
    &self,
    task: &S::Task,
    word: Word,
    deadline: WaitDeadline<S::Instant, S::Duration>,
  ) -> Result<(), MsgError> {
    <S::Interrupt as InterruptContextPolicy>::check_blocking_allowed()?;
    let flow = critical_section::with(|cs| {
      if self.send_ready(cs, word) {
        ControlFlow::Break(())
      } else {
        ControlFlow::Continue(self.scheduler.suspend(cs, task, self.key, TaskScratch::Sending(word), deadline))
      }
    });
    let ControlFlow::Continue(suspension) = flow else {
      return Ok(());
    };
    trace!(target: TARGET, key = self.key.into_raw(), word, "sender suspended");
    let (event, _) = self.scheduler.block(suspension);
    trace!(target: TARGET, key = self.key.into_raw(), event = ?event, "sender resumed");
    event.into_result()
  }

  fn receive_ready(&self, cs: CriticalSection<'_>) -> Option<Word> {
    let mut ring = self.ring.borrow_ref_mut(cs);
    let word = ring.get()?;
    if let Some(sender) = self.scheduler.wake_one(cs, self.key, WakeEvent::Success) {
      let staged = sender.take_staged(cs);
      debug_assert!(staged.is_some(), "woken task on {} was not a sender", self.key);
      if let Some(staged) = staged {
        let stored = ring.put(staged);
        debug_assert!(stored, "slot freed for a blocked sender was taken");
        trace!(target: TARGET, key = self.key.into_raw(), word = staged, "blocked sender moved into freed slot");
      }
    }
    Some(word)
  }

  fn send_ready(&self, cs: CriticalSection<'_>, word: Word) -> bool {
    let mut ring = self.ring.borrow_ref_mut(cs);
    if !ring.put(word) {
      return false;
    }
    self.serve_receiver(cs, &mut ring);
    true
  }

  fn serve_receiver(&self, cs: CriticalSection<'_>, ring: &mut MsgRing<'a>) -> bool {
    let Some(receiver) = self.scheduler.wake_one(cs, self.key, WakeEvent::Success) else {
      return false;
    };
    if let Some(oldest) = ring.get() {
      let delivered = receiver.deliver(cs, oldest);
      debug_assert!(delivered, "woken task on {} was not a receiver", self.key);
      trace!(target: TARGET, key = self.key.into_raw(), word = oldest, "message handed to blocked receiver");
    }
    true
  }
}

#[cfg(feature = "alloc")]
impl<S: TaskScheduler> MsgQueue<'static, S> {
  /// Creates an empty queue that allocates and owns `capacity` slots.
  ///
  /// # Panics
  ///
  /// Panics when `capacity` is zero or when called from an interrupt handler. Allocation
  /// failure is handled by the global allocator.
  #[must_use]
  pub fn create(capacity: usize, scheduler: S) -> Self {
    Self::with_storage(MsgStorage::owned(capacity), scheduler)
  }
}

impl<S: TaskScheduler> fmt::Debug for MsgQueue<'_, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MsgQueue").field("key", &self.key).finish_non_exhaustive()
  }
}
