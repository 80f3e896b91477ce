use alloc::vec::Vec;
use core::future::Future;

use super::InstructionHandler;


/// One instruction paired with the subscriber snapshot it must reach.
#[derive(Debug)]
pub struct InstructionDispatch<I> {
  handlers:    Vec<InstructionHandler<I>>,
  instruction: I,
}

impl<I> InstructionDispatch<I>
where
  I: Clone,
{
  /// Pairs `instruction` with `handlers`.
  #[must_use]
  pub const fn new(handlers: Vec<InstructionHandler<I>>, instruction: I) -> Self {
    Self { handlers, instruction }
  }

  /// Number of handlers the instruction will reach.
  #[must_use]
  pub fn handler_count(&self) -> usize {
    self.handlers.len()
  }

  /// Delivers the instruction to every handler in order and returns how many were invoked.
  ///
  /// The last handler receives the instruction by value; the others receive clones.
  pub fn deliver(self) -> usize {
    let Self { handlers, instruction } = self;
    let count = handlers.len();
    let mut handlers = handlers.into_iter();
    let Some(last) = handlers.next_back() else {
      return 0;
    };
    for handler in handlers {
      handler.handle(instruction.clone());
    }
    last.handle(instruction);
    count
  }

  /// Turns the dispatch into a task suitable for a [`DispatchSpawner`](super::DispatchSpawner).
  pub fn into_task(self) -> impl Future<Output = ()> + Send + 'static
  where
    I: Send + 'static, {
    async move {
      let delivered = self.deliver();
      tracing::trace!(delivered, "instruction delivered to subscribers");
    }
  }
}
