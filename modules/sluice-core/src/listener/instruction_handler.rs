use alloc::sync::Arc;
use core::fmt;

use crate::sync::ArcShared;

type InstructionHandlerFn<I> = dyn Fn(I) + Send + Sync;

/// Shared subscriber callback for the "received instruction" notification.
pub struct InstructionHandler<I> {
  inner: ArcShared<InstructionHandlerFn<I>>,
}

impl<I> InstructionHandler<I> {
  /// Creates a new handler from a closure.
  #[must_use]
  pub fn new<F>(handler: F) -> Self
  where
    F: Fn(I) + Send + Sync + 'static,
    I: 'static, {
    let inner: Arc<InstructionHandlerFn<I>> = Arc::new(handler);
    Self { inner: ArcShared::from_arc(inner) }
  }

  /// Invokes the handler with `instruction`.
  pub fn handle(&self, instruction: I) {
    (self.inner)(instruction);
  }
}

impl<I> Clone for InstructionHandler<I> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<I> fmt::Debug for InstructionHandler<I> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InstructionHandler").finish()
  }
}
