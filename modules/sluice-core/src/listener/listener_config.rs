use alloc::borrow::Cow;

use super::DispatchMode;


/// Configuration applied to an [`InstructionListener`](super::InstructionListener).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerConfig {
  /// Delivery strategy for fetched instructions.
  dispatch_mode: DispatchMode,
  /// Name attached to the listener's log events.
  label:         Cow<'static, str>,
}

impl Default for ListenerConfig {
  fn default() -> Self {
    Self { dispatch_mode: DispatchMode::Detached, label: Cow::Borrowed("instruction-listener") }
  }
}

impl ListenerConfig {
  /// Sets the dispatch mode.
  #[must_use]
  pub fn with_dispatch_mode(mut self, mode: DispatchMode) -> Self {
    self.dispatch_mode = mode;
    self
  }

  /// Sets the label used in log events.
  #[must_use]
  pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
    self.label = label.into();
    self
  }

  /// Returns the dispatch mode.
  #[must_use]
  pub const fn dispatch_mode(&self) -> DispatchMode {
    self.dispatch_mode
  }

  /// Returns the label used in log events.
  #[must_use]
  pub fn label(&self) -> &str {
    &self.label
  }
}
