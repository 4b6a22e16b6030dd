mod msg_error;
mod msg_queue;
mod msg_ring;
mod msg_storage;
mod push_outcome;

pub use msg_error::MsgError;
pub use msg_queue::MsgQueue;
pub use msg_ring::MsgRing;
pub use msg_storage::MsgStorage;
pub use push_outcome::PushOutcome;
