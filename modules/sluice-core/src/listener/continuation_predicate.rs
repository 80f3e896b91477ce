/// Decides, once per iteration, whether an [`InstructionListener`](super::InstructionListener)
/// keeps running.
pub trait ContinuationPredicate: Send {
  /// Returns `false` to stop the listener before its next notify/fetch/dispatch cycle.
  fn proceed(&mut self) -> bool;
}

impl<F> ContinuationPredicate for F
where
  F: FnMut() -> bool + Send,
{
  fn proceed(&mut self) -> bool {
    self()
  }
}
