mod maybe;
mod push_listener;
mod push_queue;

pub use maybe::Maybe;
pub use push_listener::PushListener;
pub use push_queue::PushQueue;
