use alloc::boxed::Box;

use async_trait::async_trait;

/// External source of instructions driven by an [`InstructionListener`](super::InstructionListener).
///
/// Each cycle calls [`notify`](InstructionService::notify) and, once it has returned,
/// [`next_instruction`](InstructionService::next_instruction). Errors from either end the loop
/// and are handed back to the caller of `start_listening`.
#[async_trait]
pub trait InstructionService: Send {
  /// Instruction type produced by the service.
  type Instruction: Send;
  /// Error surfaced by `notify` or `next_instruction`.
  type Error: Send;

  /// Announces that the listener is about to fetch.
  ///
  /// # Errors
  ///
  /// Returns the service error when the notification cannot be delivered.
  fn notify(&mut self) -> Result<(), Self::Error>;

  /// Produces the next instruction, suspending until one is available.
  ///
  /// # Errors
  ///
  /// Returns the service error when no instruction can be produced.
  async fn next_instruction(&mut self) -> Result<Self::Instruction, Self::Error>;
}
