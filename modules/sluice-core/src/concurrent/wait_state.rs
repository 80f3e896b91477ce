/// State of a [`WaitSlot`](super::WaitSlot).
#[derive(Debug)]
pub enum WaitState<B> {
  /// No consumer is suspended. Push notifications are no-ops.
  Idle,
  /// A consumer is suspended on the stored handle.
  Waiting(B),
}

impl<B> WaitState<B> {
  /// Returns `true` while a handle is stored.
  #[must_use]
  pub const fn is_waiting(&self) -> bool {
    matches!(self, Self::Waiting(_))
  }
}

impl<B> Default for WaitState<B> {
  fn default() -> Self {
    Self::Idle
  }
}
