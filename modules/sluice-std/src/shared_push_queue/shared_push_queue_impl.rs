use std::{
  collections::VecDeque,
  fmt,
  sync::{Arc, Mutex, MutexGuard},
};

use sluice_core_rs::{Maybe, PushListener, PushQueue};

use super::SharedPushSubscription;
use crate::subscriber_registry::SubscriberRegistry;

/// Unbounded FIFO queue guarded by a std mutex that announces every push to its subscribers.
///
/// Pushed listeners run on the producer's thread after the storage lock has been released.
pub struct SharedPushQueue<T> {
  items:    Mutex<VecDeque<T>>,
  registry: Arc<SubscriberRegistry<PushListener>>,
}

impl<T> SharedPushQueue<T> {
  /// Creates a new `SharedPushQueue` instance.
  ///
  /// # Returns
  ///
  /// An empty queue without pushed listeners
  #[must_use]
  pub fn new() -> Self {
    Self { items: Mutex::new(VecDeque::new()), registry: Arc::new(SubscriberRegistry::default()) }
  }

  /// Appends `item` and notifies every pushed listener.
  pub fn push(&self, item: T) {
    self.lock_items().push_back(item);
    self.notify_listeners();
  }

  /// Appends every item of `items`, then notifies the listeners once per item.
  ///
  /// # Arguments
  ///
  /// * `items` - Items appended in iteration order under a single lock acquisition
  pub fn extend<I>(&self, items: I)
  where
    I: IntoIterator<Item = T>, {
    let pushed = {
      let mut guard = self.lock_items();
      let before = guard.len();
      guard.extend(items);
      guard.len() - before
    };
    for _ in 0..pushed {
      self.notify_listeners();
    }
  }

  /// Number of queued items.
  #[must_use]
  pub fn len(&self) -> usize {
    self.lock_items().len()
  }

  /// Returns `true` when no item is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lock_items().is_empty()
  }

  /// Number of registered pushed listeners.
  #[must_use]
  pub fn listener_count(&self) -> usize {
    self.registry.count()
  }

  fn lock_items(&self) -> MutexGuard<'_, VecDeque<T>> {
    self.items.lock().unwrap_or_else(|err| err.into_inner())
  }

  fn notify_listeners(&self) {
    for listener in self.registry.snapshot() {
      listener.notify();
    }
  }
}

impl<T> Default for SharedPushQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for SharedPushQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SharedPushQueue").field("len", &self.len()).field("listeners", &self.listener_count()).finish()
  }
}

impl<T> PushQueue<T> for SharedPushQueue<T>
where
  T: Send,
{
  type Subscription = SharedPushSubscription;

  fn pop(&self) -> Maybe<T> {
    self.lock_items().pop_front().into()
  }

  fn subscribe_pushed(&self, listener: PushListener) -> Self::Subscription {
    let id = self.registry.register(|_| listener);
    SharedPushSubscription { registry: self.registry.clone(), id }
  }
}
