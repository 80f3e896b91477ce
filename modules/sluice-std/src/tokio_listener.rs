use sluice_core_rs::{
  ArcShared, ContinuationPredicate, InstructionListener, InstructionService, ListenerConfig, QueueFetcher,
};

use crate::{InstructionHub, SharedPushQueue, TokioSpawner, TokioWaitHandle};

/// [`QueueFetcher`] over a [`SharedPushQueue`] that parks on Tokio's `Notify`.
pub type TokioQueueFetcher<T> = QueueFetcher<T, SharedPushQueue<T>, TokioWaitHandle>;

/// [`InstructionListener`] that fans out through an [`InstructionHub`] and dispatches with `tokio::spawn`.
pub type TokioInstructionListener<S, P> =
  InstructionListener<S, P, InstructionHub<<S as InstructionService>::Instruction>, TokioSpawner>;

/// Creates a fetcher over `queue` using the Tokio wait handle.
pub fn tokio_queue_fetcher<T>(queue: ArcShared<SharedPushQueue<T>>) -> TokioQueueFetcher<T>
where
  T: Send, {
  QueueFetcher::new(queue)
}

/// Creates a listener with a fresh [`InstructionHub`], [`TokioSpawner`] and `config`.
pub fn tokio_instruction_listener<S, P>(predicate: P, service: S, config: ListenerConfig) -> TokioInstructionListener<S, P>
where
  S: InstructionService,
  S::Instruction: Clone + 'static,
  P: ContinuationPredicate, {
  InstructionListener::new(predicate, service, InstructionHub::new(), TokioSpawner).with_config(config)
}
