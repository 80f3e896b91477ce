use portable_atomic::{AtomicBool, Ordering};

use super::ContinuationPredicate;
use crate::sync::ArcShared;

#[cfg(test)]
mod tests;

/// Cloneable continuation predicate that stays open until closed.
///
/// Closing takes effect at the top of the listener's next iteration; a fetch that is already
/// suspended is not interrupted. Once closed, a gate cannot be reopened.
#[derive(Clone, Debug)]
pub struct ListenGate {
  open: ArcShared<AtomicBool>,
}

impl ListenGate {
  /// Creates an open gate.
  #[must_use]
  pub fn new() -> Self {
    Self { open: ArcShared::new(AtomicBool::new(true)) }
  }

  /// Closes the gate. Safe to call from any thread, any number of times.
  pub fn close(&self) {
    self.open.store(false, Ordering::SeqCst);
  }

  /// Returns `true` until [`close`](ListenGate::close) has been called on any clone.
  #[must_use]
  pub fn is_open(&self) -> bool {
    self.open.load(Ordering::SeqCst)
  }
}

impl Default for ListenGate {
  fn default() -> Self {
    Self::new()
  }
}

impl ContinuationPredicate for ListenGate {
  fn proceed(&mut self) -> bool {
    self.is_open()
  }
}
