use alloc::vec::Vec;

use super::InstructionHandler;

/// Subscriber registry behind the "received instruction" notification.
///
/// The listener takes a [`snapshot`](InstructionFanout::snapshot) as soon as a fetch resolves and
/// delivers to exactly that set, so handlers registered afterwards do not see the instruction.
pub trait InstructionFanout<I>: Send + Sync {
  /// Registration handle. Dropping it unregisters the handler.
  type Subscription;

  /// Registers `handler`.
  fn subscribe(&self, handler: InstructionHandler<I>) -> Self::Subscription;

  /// Returns the handlers registered right now, in registration order.
  fn snapshot(&self) -> Vec<InstructionHandler<I>>;

  /// Number of registered handlers.
  fn handler_count(&self) -> usize {
    self.snapshot().len()
  }
}
