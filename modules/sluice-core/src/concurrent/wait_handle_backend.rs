use core::future::Future;

/// Signal-once wait handle used by [`WaitSlot`](super::WaitSlot).
///
/// A handle gates exactly one waiter and accepts exactly one effective signal. Clones share the
/// same underlying state, so the slot can keep one clone while the waiting task awaits another.
pub trait WaitHandleBackend: Clone + Send + Sync + 'static {
  /// Future returned by [`WaitHandleBackend::wait`].
  type WaitFuture<'a>: Future<Output = ()> + Send + 'a
  where
    Self: 'a;

  /// Allocates a fresh, unsignaled handle.
  fn new() -> Self;

  /// Signals the handle.
  ///
  /// Returns `true` only for the call that moved the handle into the signaled state; later calls
  /// are no-ops returning `false`.
  fn signal(&self) -> bool;

  /// Returns `true` once the handle has been signaled.
  fn is_signaled(&self) -> bool;

  /// Waits until the handle is signaled. Resolves immediately if it already was.
  fn wait(&self) -> Self::WaitFuture<'_>;
}
