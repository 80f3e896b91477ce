use core::fmt;

use super::{
  ContinuationPredicate, DispatchMode, DispatchSpawner, InstructionDispatch, InstructionFanout, InstructionHandler,
  InstructionService, ListenerConfig,
};

#[cfg(test)]
mod tests;

/// Loop that fetches instructions from a service and republishes them to subscribers.
///
/// Each iteration checks the continuation predicate, notifies the service, fetches the next
/// instruction and dispatches it to the subscribers registered at that moment. Notify completes
/// before the fetch starts, and the dispatch is initiated only after the fetch has resolved.
///
/// # Example
/// ```ignore
/// let mut listener = InstructionListener::new(gate.clone(), service, hub, TokioSpawner);
/// let _subscription = listener.subscribe(InstructionHandler::new(|instruction| apply(instruction)));
/// let cycles = listener.start_listening().await?;
/// ```
pub struct InstructionListener<S, P, F, Sp> {
  service:   S,
  predicate: P,
  fanout:    F,
  spawner:   Sp,
  config:    ListenerConfig,
}

impl<S, P, F, Sp> InstructionListener<S, P, F, Sp>
where
  S: InstructionService,
  S::Instruction: Clone + 'static,
  P: ContinuationPredicate,
  F: InstructionFanout<S::Instruction>,
  Sp: DispatchSpawner,
{
  /// Creates a listener with the default [`ListenerConfig`].
  ///
  /// # Arguments
  ///
  /// * `predicate` - Consulted at the top of every cycle; `false` ends the loop
  /// * `service` - Notified before, and then asked for, every instruction
  /// * `fanout` - Subscriber registry snapshotted once each fetch resolves
  /// * `spawner` - Runs dispatch tasks in [`DispatchMode::Detached`]
  pub fn new(predicate: P, service: S, fanout: F, spawner: Sp) -> Self {
    Self { service, predicate, fanout, spawner, config: ListenerConfig::default() }
  }

  /// Replaces the configuration.
  #[must_use]
  pub fn with_config(mut self, config: ListenerConfig) -> Self {
    self.config = config;
    self
  }

  /// Registers a handler for the "received instruction" notification.
  pub fn subscribe(&self, handler: InstructionHandler<S::Instruction>) -> F::Subscription {
    self.fanout.subscribe(handler)
  }

  /// Returns the subscriber registry.
  #[must_use]
  pub const fn fanout(&self) -> &F {
    &self.fanout
  }

  /// Borrows the instruction service.
  #[must_use]
  pub const fn service(&self) -> &S {
    &self.service
  }

  /// Runs notify/fetch/dispatch cycles until the continuation predicate returns `false`.
  ///
  /// Returns the number of completed cycles. The predicate is only consulted between cycles, so
  /// a fetch that is already suspended keeps waiting.
  ///
  /// # Errors
  ///
  /// Returns the service error raised by `notify` or `next_instruction`. The loop stops at the
  /// failing cycle; nothing is dispatched for it.
  pub async fn start_listening(&mut self) -> Result<u64, S::Error> {
    let mut cycles: u64 = 0;
    tracing::debug!(listener = %self.config.label(), mode = ?self.config.dispatch_mode(), "instruction listener started");

    while self.predicate.proceed() {
      if let Err(error) = self.service.notify() {
        tracing::warn!(listener = %self.config.label(), cycle = cycles + 1, "service notify failed, stopping");
        return Err(error);
      }

      let instruction = match self.service.next_instruction().await {
        | Ok(instruction) => instruction,
        | Err(error) => {
          tracing::warn!(listener = %self.config.label(), cycle = cycles + 1, "instruction fetch failed, stopping");
          return Err(error);
        },
      };

      let dispatch = InstructionDispatch::new(self.fanout.snapshot(), instruction);
      let handlers = dispatch.handler_count();
      match self.config.dispatch_mode() {
        | DispatchMode::Detached => self.spawner.spawn_dispatch(dispatch.into_task()),
        | DispatchMode::Inline => {
          dispatch.deliver();
        },
      }

      cycles += 1;
      tracing::trace!(listener = %self.config.label(), cycle = cycles, handlers, "instruction dispatched");
    }

    tracing::debug!(listener = %self.config.label(), cycles, "continuation predicate declined, listener stopped");
    Ok(cycles)
  }
}

impl<S, P, F, Sp> fmt::Debug for InstructionListener<S, P, F, Sp> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InstructionListener").field("config", &self.config).finish()
  }
}
