use alloc::boxed::Box;
use core::{fmt, marker::PhantomData};

use async_trait::async_trait;

use super::InstructionService;
use crate::{
  collections::PushQueue,
  concurrent::{QueueFetcher, SignalOnce, WaitHandleBackend},
};


/// [`InstructionService`] that runs a notify hook and then fetches from a push queue.
///
/// Fetching goes through a [`QueueFetcher`], so an empty queue suspends the listener until a
/// producer pushes.
pub struct QueueInstructionService<T, Q, N, E, B = SignalOnce>
where
  Q: PushQueue<T>,
  B: WaitHandleBackend, {
  fetcher: QueueFetcher<T, Q, B>,
  notify:  N,
  _error:  PhantomData<fn() -> E>,
}

impl<T, Q, N, E, B> QueueInstructionService<T, Q, N, E, B>
where
  Q: PushQueue<T>,
  B: WaitHandleBackend,
  N: FnMut() -> Result<(), E>,
{
  /// Creates a service from a fetcher and the hook invoked before every fetch.
  pub fn new(fetcher: QueueFetcher<T, Q, B>, notify: N) -> Self {
    Self { fetcher, notify, _error: PhantomData }
  }

  /// Borrows the underlying fetcher.
  #[must_use]
  pub const fn fetcher(&self) -> &QueueFetcher<T, Q, B> {
    &self.fetcher
  }
}

#[async_trait]
impl<T, Q, N, E, B> InstructionService for QueueInstructionService<T, Q, N, E, B>
where
  T: Send,
  Q: PushQueue<T>,
  B: WaitHandleBackend,
  N: FnMut() -> Result<(), E> + Send,
  E: Send,
{
  type Error = E;
  type Instruction = T;

  fn notify(&mut self) -> Result<(), Self::Error> {
    (self.notify)()
  }

  async fn next_instruction(&mut self) -> Result<Self::Instruction, Self::Error> {
    Ok(self.fetcher.fetch_item().await)
  }
}

impl<T, Q, N, E, B> fmt::Debug for QueueInstructionService<T, Q, N, E, B>
where
  Q: PushQueue<T>,
  B: WaitHandleBackend,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("QueueInstructionService").field("fetcher", &self.fetcher).finish()
  }
}
