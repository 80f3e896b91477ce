use std::{fmt, sync::Arc};

use sluice_core_rs::InstructionHandler;

use crate::subscriber_registry::SubscriberRegistry;

/// Subscription handle to an [`InstructionHub`](super::InstructionHub). Automatically unsubscribes on Drop.
pub struct InstructionSubscription<I> {
  pub(super) registry: Arc<SubscriberRegistry<InstructionHandler<I>>>,
  pub(super) id:       u64,
}

impl<I> InstructionSubscription<I> {
  /// Identifier assigned at registration, as it appears in subscriber logs.
  #[must_use]
  pub const fn id(&self) -> u64 {
    self.id
  }

  /// Unregisters the handler now instead of at drop time.
  pub fn unsubscribe(self) {
    drop(self);
  }
}

impl<I> fmt::Debug for InstructionSubscription<I> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InstructionSubscription").field("id", &self.id).finish()
  }
}

impl<I> Drop for InstructionSubscription<I> {
  fn drop(&mut self) {
    self.registry.unregister(self.id);
  }
}
