mod fetch_attempt;
mod queue_fetcher;
mod signal_once;
mod wait_handle_backend;
mod wait_slot;
mod wait_state;

pub use fetch_attempt::FetchAttempt;
pub use queue_fetcher::QueueFetcher;
pub use signal_once::{SignalOnce, SignalOnceWait};
pub use wait_handle_backend::WaitHandleBackend;
pub use wait_slot::WaitSlot;
pub use wait_state::WaitState;
