#[cfg(all(feature = "alloc", any(test, feature = "test-support")))]
mod manual_suspension;
#[cfg(all(feature = "alloc", any(test, feature = "test-support")))]
mod manual_task;
#[cfg(all(feature = "alloc", any(test, feature = "test-support")))]
mod manual_task_scheduler;
mod task_cell;
mod task_scheduler;
mod task_scratch;
mod task_wait_state;
mod wait_deadline;
#[cfg(feature = "alloc")]
mod wait_entry;
#[cfg(feature = "alloc")]
mod wait_list;
#[cfg(feature = "alloc")]
mod wait_registry;
mod waiting_task;
mod wake_event;

#[cfg(all(feature = "alloc", any(test, feature = "test-support")))]
pub use manual_suspension::ManualSuspension;
#[cfg(all(feature = "alloc", any(test, feature = "test-support")))]
pub use manual_task::ManualTask;
#[cfg(all(feature = "alloc", any(test, feature = "test-support")))]
pub use manual_task_scheduler::ManualTaskScheduler;
pub use task_cell::TaskCell;
pub use task_scheduler::TaskScheduler;
pub use task_scratch::TaskScratch;
pub use task_wait_state::TaskWaitState;
pub use wait_deadline::WaitDeadline;
#[cfg(feature = "alloc")]
pub use wait_entry::WaitEntry;
#[cfg(feature = "alloc")]
pub use wait_list::WaitList;
#[cfg(feature = "alloc")]
pub use wait_registry::WaitRegistry;
pub use waiting_task::WaitingTask;
pub use wake_event::WakeEvent;
