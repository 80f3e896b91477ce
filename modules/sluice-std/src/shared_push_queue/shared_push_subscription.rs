use std::{fmt, sync::Arc};

use sluice_core_rs::PushListener;

use crate::subscriber_registry::SubscriberRegistry;

/// Subscription handle to a [`SharedPushQueue`](super::SharedPushQueue). Automatically unsubscribes on Drop.
pub struct SharedPushSubscription {
  pub(super) registry: Arc<SubscriberRegistry<PushListener>>,
  pub(super) id:       u64,
}

impl SharedPushSubscription {
  /// Unregisters the listener now instead of at drop time.
  pub fn unsubscribe(self) {
    drop(self);
  }
}

impl fmt::Debug for SharedPushSubscription {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SharedPushSubscription").field("id", &self.id).finish()
  }
}

impl Drop for SharedPushSubscription {
  fn drop(&mut self) {
    self.registry.unregister(self.id);
  }
}
