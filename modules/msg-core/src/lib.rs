#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::manual_assert)]
#![no_std]

//! Bounded blocking message queue for preemptible real-time kernels.
//!
//! A [`MsgQueue`](msg::MsgQueue) moves word-sized messages between tasks through a fixed-capacity
//! ring buffer. Non-blocking `take`/`give`/`push` are safe from interrupt handlers, blocking
//! `wait*`/`send*` suspend the calling task through a [`TaskScheduler`](task::TaskScheduler)
//! and hand messages directly to a waiting peer when one exists.
//!
//! All shared state is guarded by the `critical-section` crate, which is the single kernel lock.
//! The lock is never held while a task is suspended.

#[cfg(feature = "alloc")]
extern crate alloc;

/// Message queue, its storage and the result types it reports.
pub mod msg;
/// Kernel lock helpers, interrupt context policies and wait keys.
pub mod sync;
/// Scheduler interface the message queue suspends and wakes tasks through.
pub mod task;

/// Word-sized message carried by a [`MsgQueue`](msg::MsgQueue).
pub type Word = usize;
