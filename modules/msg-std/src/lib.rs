#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]

//! Thread-backed task scheduler for rtmsg message queues on hosted targets.
//!
//! Every OS thread bound through [`StdTaskScheduler::task`] acts as one kernel task. Blocking
//! queue operations park the thread; wakeups unpark it.

mod std_suspension;
mod std_task;
mod std_task_config;
mod std_task_scheduler;

pub use std_suspension::StdSuspension;
pub use std_task::StdTask;
pub use std_task_config::StdTaskConfig;
pub use std_task_scheduler::StdTaskScheduler;
