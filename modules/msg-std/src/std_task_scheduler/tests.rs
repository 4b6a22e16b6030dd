use std::{
  thread,
  time::{Duration, Instant},
};

use critical_section::with;
use rtmsg_core_rs::{
  sync::WaitKey,
  task::{TaskScheduler, TaskScratch, WaitDeadline, WaitingTask, WakeEvent},
};

use super::StdTaskScheduler;
use crate::StdTaskConfig;

const KEY: WaitKey = WaitKey::from_raw(501);

#[test]
fn tasks_get_distinct_ids() {
  let scheduler = StdTaskScheduler::new();
  let first = scheduler.task(&StdTaskConfig::new());
  let second = scheduler.task(&StdTaskConfig::new().with_name("second").with_priority(3));
  assert_ne!(first.id(), second.id());
  assert_eq!(second.name(), Some("second"));
  assert_eq!(second.priority(), 3);
  assert!(!first.same_task(&second));
  assert!(first.same_task(&first.clone()));
}

#[test]
fn past_deadline_resolves_without_registering() {
  let scheduler = StdTaskScheduler::new();
  let task = scheduler.task(&StdTaskConfig::new());
  let suspension =
    with(|cs| scheduler.suspend(cs, &task, KEY, TaskScratch::Receiving, WaitDeadline::For(Duration::ZERO)));
  assert_eq!(scheduler.waiting(KEY), 0);
  assert_eq!(scheduler.block(suspension), (WakeEvent::Timeout, TaskScratch::Receiving));
}

#[test]
fn elapsed_deadline_removes_waiter() {
  let scheduler = StdTaskScheduler::new();
  let task = scheduler.task(&StdTaskConfig::new());
  let started = Instant::now();
  let suspension =
    with(|cs| scheduler.suspend(cs, &task, KEY, TaskScratch::Receiving, WaitDeadline::For(Duration::from_millis(20))));
  assert_eq!(scheduler.waiting(KEY), 1);
  let (event, _) = scheduler.block(suspension);
  assert_eq!(event, WakeEvent::Timeout);
  assert!(started.elapsed() >= Duration::from_millis(20));
  assert_eq!(scheduler.blocked(), 0);
}

#[test]
fn wake_one_unparks_blocked_thread() {
  let scheduler = StdTaskScheduler::new();
  thread::scope(|scope| {
    let receiver = scope.spawn(|| {
      let task = scheduler.task(&StdTaskConfig::new().with_name("receiver"));
      let suspension = with(|cs| scheduler.suspend(cs, &task, KEY, TaskScratch::Receiving, WaitDeadline::Infinite));
      scheduler.block(suspension)
    });

    while scheduler.waiting(KEY) == 0 {
      thread::yield_now();
    }
    with(|cs| {
      let woken = scheduler.wake_one(cs, KEY, WakeEvent::Success);
      assert!(woken.is_some_and(|task| task.deliver(cs, 64)));
    });

    let (event, scratch) = receiver.join().unwrap();
    assert_eq!(event, WakeEvent::Success);
    assert_eq!(scratch.received(), Some(64));
  });
}

#[test]
fn wake_all_reaches_every_thread() {
  let scheduler = StdTaskScheduler::new();
  thread::scope(|scope| {
    let handles: Vec<_> = (0..3)
      .map(|_| {
        scope.spawn(|| {
          let task = scheduler.task(&StdTaskConfig::new());
          let suspension = with(|cs| {
            scheduler.suspend(cs, &task, KEY, TaskScratch::Sending(1), WaitDeadline::For(Duration::from_secs(30)))
          });
          scheduler.block(suspension).0
        })
      })
      .collect();

    while scheduler.waiting(KEY) < 3 {
      thread::yield_now();
    }
    assert_eq!(with(|cs| scheduler.wake_all(cs, KEY, WakeEvent::Stopped)), 3);
    for handle in handles {
      assert_eq!(handle.join().unwrap(), WakeEvent::Stopped);
    }
  });
}

#[test]
fn relative_delay_resolves_against_now() {
  let scheduler = StdTaskScheduler::new();
  let task = scheduler.task(&StdTaskConfig::new());
  let before = Instant::now();
  let suspension =
    with(|cs| scheduler.suspend(cs, &task, KEY, TaskScratch::Receiving, WaitDeadline::For(Duration::from_secs(5))));
  let deadline = suspension.deadline().unwrap();
  assert!(deadline >= before + Duration::from_secs(5));
  assert!(deadline <= Instant::now() + Duration::from_secs(5));

  with(|cs| scheduler.wake_all(cs, KEY, WakeEvent::Stopped));
  assert_eq!(scheduler.block(suspension).0, WakeEvent::Stopped);
}

#[test]
fn overflowing_delay_waits_without_deadline() {
  let scheduler = StdTaskScheduler::new();
  let task = scheduler.task(&StdTaskConfig::new());
  let suspension =
    with(|cs| scheduler.suspend(cs, &task, KEY, TaskScratch::Receiving, WaitDeadline::For(Duration::MAX)));
  assert!(suspension.deadline().is_none());
  assert_eq!(scheduler.waiting(KEY), 1);

  with(|cs| {
    let woken = scheduler.wake_one(cs, KEY, WakeEvent::Success);
    assert!(woken.is_some_and(|waiter| waiter.deliver(cs, 3)));
  });
  let (event, scratch) = scheduler.block(suspension);
  assert_eq!(event, WakeEvent::Success);
  assert_eq!(scratch.received(), Some(3));
}
