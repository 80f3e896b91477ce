use super::{Maybe, PushListener};

/// Queue capability consumed by [`QueueFetcher`](crate::QueueFetcher).
///
/// Implementations own the storage. The fetcher only relies on this contract:
///
/// - [`pop`](PushQueue::pop) never suspends and returns a present value only if an item was
///   removable at call time.
/// - every listener registered through [`subscribe_pushed`](PushQueue::subscribe_pushed) is
///   invoked at least once after each successful push.
/// - listeners are invoked without holding any lock that `pop` acquires. The fetcher calls `pop`
///   while holding its own slot lock, and its listener takes that same lock.
pub trait PushQueue<T>: Send + Sync {
  /// Handle keeping a pushed listener registered. Dropping it unregisters the listener.
  type Subscription: Send + Sync;

  /// Removes the next available item without blocking.
  fn pop(&self) -> Maybe<T>;

  /// Registers a listener for the pushed notification.
  fn subscribe_pushed(&self, listener: PushListener) -> Self::Subscription;
}
