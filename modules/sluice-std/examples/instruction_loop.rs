//! Producer task pushing instructions into a shared queue while an instruction listener
//! fetches them and fans them out to two subscribers.
//!
//! Run with `RUST_LOG=debug` to see the fetcher arm and wake.

use std::time::Duration;

use sluice_std_rs::{
  tokio_instruction_listener, tokio_queue_fetcher, ArcShared, InstructionHandler, ListenGate, ListenerConfig,
  QueueInstructionService, SharedPushQueue,
};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Debug)]
enum Instruction {
  Move { x: i32, y: i32 },
  Say(String),
  Halt,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  let _ = FmtSubscriber::builder().with_env_filter(env_filter).try_init();

  let queue = ArcShared::new(SharedPushQueue::new());
  let gate = ListenGate::new();

  let service = QueueInstructionService::new(tokio_queue_fetcher(queue.clone()), || {
    tracing::info!("ready for the next instruction");
    Ok::<(), std::convert::Infallible>(())
  });
  let mut listener = tokio_instruction_listener(gate.clone(), service, ListenerConfig::default().with_label("demo"));

  let _printer = listener.subscribe(InstructionHandler::new(|instruction: Instruction| {
    tracing::info!(?instruction, "printer received");
  }));
  let closer = gate.clone();
  let _controller = listener.subscribe(InstructionHandler::new(move |instruction: Instruction| {
    if matches!(instruction, Instruction::Halt) {
      closer.close();
    }
  }));

  let producer = {
    let queue = queue.clone();
    tokio::spawn(async move {
      let script = [
        Instruction::Say("hello".to_owned()),
        Instruction::Move { x: 3, y: 4 },
        Instruction::Move { x: -1, y: 0 },
        Instruction::Halt,
      ];
      for instruction in script {
        tokio::time::sleep(Duration::from_millis(50)).await;
        queue.push(instruction);
      }
    })
  };

  // Halt is dispatched on a spawned task, so the gate may close one cycle late. Push a trailing
  // instruction to unblock that extra fetch.
  let stopper = {
    let queue = queue.clone();
    let gate = gate.clone();
    tokio::spawn(async move {
      while gate.is_open() {
        tokio::time::sleep(Duration::from_millis(10)).await;
      }
      queue.push(Instruction::Say("bye".to_owned()));
    })
  };

  match listener.start_listening().await {
    | Ok(cycles) => tracing::info!(cycles, "listener finished"),
    | Err(never) => match never {},
  }
  let _ = producer.await;
  let _ = stopper.await;
}
