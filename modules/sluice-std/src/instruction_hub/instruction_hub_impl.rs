use std::{
  fmt,
  panic::{catch_unwind, AssertUnwindSafe},
  sync::Arc,
};

use sluice_core_rs::{InstructionDispatch, InstructionFanout, InstructionHandler};

use super::InstructionSubscription;
use crate::subscriber_registry::SubscriberRegistry;

/// [`InstructionFanout`] implementation for std.
///
/// Handlers are isolated from each other: a handler that panics is logged and skipped, and the
/// remaining handlers still receive the instruction.
pub struct InstructionHub<I> {
  registry: Arc<SubscriberRegistry<InstructionHandler<I>>>,
}

impl<I> InstructionHub<I>
where
  I: Send + 'static,
{
  /// Creates a new `InstructionHub` instance.
  ///
  /// # Returns
  ///
  /// A hub without subscribers
  #[must_use]
  pub fn new() -> Self {
    Self { registry: Arc::new(SubscriberRegistry::default()) }
  }

  /// Delivers `instruction` to the current subscribers in registration order.
  ///
  /// # Arguments
  ///
  /// * `instruction` - The instruction to deliver; every handler but the last receives a clone
  ///
  /// # Returns
  ///
  /// The number of handlers invoked
  pub fn publish(&self, instruction: I) -> usize
  where
    I: Clone, {
    InstructionDispatch::new(self.snapshot(), instruction).deliver()
  }

  fn isolate(id: u64, handler: InstructionHandler<I>) -> InstructionHandler<I> {
    InstructionHandler::new(move |instruction: I| {
      if catch_unwind(AssertUnwindSafe(|| handler.handle(instruction))).is_err() {
        tracing::error!(subscription = id, "instruction subscriber panicked, remaining subscribers still notified");
      }
    })
  }
}

impl<I> InstructionFanout<I> for InstructionHub<I>
where
  I: Send + 'static,
{
  type Subscription = InstructionSubscription<I>;

  fn subscribe(&self, handler: InstructionHandler<I>) -> Self::Subscription {
    let id = self.registry.register(|id| Self::isolate(id, handler));
    tracing::debug!(subscription = id, "instruction subscriber registered");

    InstructionSubscription { registry: self.registry.clone(), id }
  }

  fn snapshot(&self) -> Vec<InstructionHandler<I>> {
    self.registry.snapshot()
  }

  fn handler_count(&self) -> usize {
    self.registry.count()
  }
}

impl<I> Clone for InstructionHub<I> {
  fn clone(&self) -> Self {
    Self { registry: self.registry.clone() }
  }
}

impl<I> Default for InstructionHub<I>
where
  I: Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<I> fmt::Debug for InstructionHub<I> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InstructionHub").field("handlers", &self.registry.count()).finish()
  }
}
