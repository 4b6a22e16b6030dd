/// Policies for detecting interrupt contexts prior to blocking operations.
pub mod interrupt;
mod wait_key;
mod wait_key_allocator;

pub use interrupt::{CriticalSectionInterruptPolicy, InterruptContextPolicy, NeverInterruptPolicy};
pub use wait_key::WaitKey;
pub use wait_key_allocator::WaitKeyAllocator;
