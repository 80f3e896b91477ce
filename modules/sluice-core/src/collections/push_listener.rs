use alloc::sync::Arc;
use core::fmt;

use crate::sync::ArcShared;

#[cfg(test)]
mod tests;

type PushListenerFn = dyn Fn() + Send + Sync;

/// Shared callback invoked once per successful push.
///
/// The notification is a pure wake-up signal and carries no payload.
#[derive(Clone)]
pub struct PushListener {
  inner: ArcShared<PushListenerFn>,
}

impl PushListener {
  /// Creates a new `PushListener` from a closure
  ///
  /// # Arguments
  ///
  /// * `listener` - Callback run after each push, possibly on the producer's thread
  ///
  /// # Returns
  ///
  /// A cloneable listener sharing `listener`
  #[must_use]
  pub fn new<F>(listener: F) -> Self
  where
    F: Fn() + Send + Sync + 'static, {
    let inner: Arc<PushListenerFn> = Arc::new(listener);
    Self { inner: ArcShared::from_arc(inner) }
  }

  /// Invokes the listener.
  pub fn notify(&self) {
    (self.inner)();
  }
}

impl fmt::Debug for PushListener {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PushListener").finish()
  }
}
