use std::{
  collections::VecDeque,
  future::Future,
  pin::pin,
  sync::{Arc, Mutex},
  task::{Context, Poll},
};

use async_trait::async_trait;
use futures::{executor::block_on, future::BoxFuture, task::noop_waker};

use super::*;
use crate::{
  concurrent::QueueFetcher,
  listener::{
    DispatchMode, DispatchSpawner, InstructionFanout, InstructionHandler, InstructionService, ListenGate, ListenerConfig,
    QueueInstructionService,
  },
  sync::ArcShared,
  test_support::TestQueue,
};

type Log = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestError {
  NotifyRejected,
  FetchRejected,
}

struct TestService {
  instructions: VecDeque<String>,
  log:          Log,
  fail_notify:  bool,
  fail_fetch:   bool,
}

impl TestService {
  fn new(instructions: &[&str], log: &Log) -> Self {
    Self {
      instructions: instructions.iter().map(|s| (*s).to_string()).collect(),
      log:          log.clone(),
      fail_notify:  false,
      fail_fetch:   false,
    }
  }
}

#[async_trait]
impl InstructionService for TestService {
  type Error = TestError;
  type Instruction = String;

  fn notify(&mut self) -> Result<(), Self::Error> {
    self.log.lock().unwrap().push("notify".into());
    if self.fail_notify {
      return Err(TestError::NotifyRejected);
    }
    Ok(())
  }

  async fn next_instruction(&mut self) -> Result<Self::Instruction, Self::Error> {
    if self.fail_fetch {
      return Err(TestError::FetchRejected);
    }
    let instruction = self.instructions.pop_front().unwrap_or_else(|| "idle".into());
    self.log.lock().unwrap().push(format!("fetch:{instruction}"));
    Ok(instruction)
  }
}

#[derive(Clone, Default)]
struct TestFanout {
  handlers: Arc<Mutex<Vec<InstructionHandler<String>>>>,
}

impl InstructionFanout<String> for TestFanout {
  type Subscription = ();

  fn subscribe(&self, handler: InstructionHandler<String>) -> Self::Subscription {
    self.handlers.lock().unwrap().push(handler);
  }

  fn snapshot(&self) -> Vec<InstructionHandler<String>> {
    self.handlers.lock().unwrap().clone()
  }
}

#[derive(Clone, Default)]
struct DeferredSpawner {
  tasks: Arc<Mutex<Vec<BoxFuture<'static, ()>>>>,
}

impl DeferredSpawner {
  fn pending(&self) -> usize {
    self.tasks.lock().unwrap().len()
  }

  fn run_all(&self) {
    let tasks: Vec<_> = self.tasks.lock().unwrap().drain(..).collect();
    for task in tasks {
      block_on(task);
    }
  }
}

impl DispatchSpawner for DeferredSpawner {
  fn spawn_dispatch(&self, task: impl core::future::Future<Output = ()> + Send + 'static) {
    self.tasks.lock().unwrap().push(Box::pin(task));
  }
}

fn recording(log: &Log, name: &'static str) -> InstructionHandler<String> {
  let log = log.clone();
  InstructionHandler::new(move |instruction: String| log.lock().unwrap().push(format!("{name}:{instruction}")))
}

fn countdown(mut remaining: usize) -> impl FnMut() -> bool + Send {
  move || {
    if remaining == 0 {
      return false;
    }
    remaining -= 1;
    true
  }
}

fn inline() -> ListenerConfig {
  ListenerConfig::default().with_dispatch_mode(DispatchMode::Inline)
}

#[test]
fn runs_exactly_k_cycles() {
  let log: Log = Arc::default();
  let spawner = DeferredSpawner::default();
  let service = TestService::new(&["a", "b", "c", "d"], &log);
  let mut listener = InstructionListener::new(countdown(3), service, TestFanout::default(), spawner.clone());

  assert_eq!(block_on(listener.start_listening()), Ok(3));
  assert_eq!(spawner.pending(), 3);
  let notifies = log.lock().unwrap().iter().filter(|entry| entry.as_str() == "notify").count();
  assert_eq!(notifies, 3);
  assert_eq!(listener.service().instructions.len(), 1);
}

#[test]
fn predicate_false_at_start_runs_nothing() {
  let log: Log = Arc::default();
  let service = TestService::new(&["a"], &log);
  let mut listener = InstructionListener::new(|| false, service, TestFanout::default(), DeferredSpawner::default());

  assert_eq!(block_on(listener.start_listening()), Ok(0));
  assert!(log.lock().unwrap().is_empty());
}

#[test]
fn single_cycle_delivers_prequeued_instruction() {
  let log: Log = Arc::default();
  let spawner = DeferredSpawner::default();
  let mut listener =
    InstructionListener::new(countdown(1), TestService::new(&["X"], &log), TestFanout::default(), spawner.clone());
  listener.subscribe(recording(&log, "sub"));

  assert_eq!(block_on(listener.start_listening()), Ok(1));
  assert_eq!(*log.lock().unwrap(), vec!["notify".to_string(), "fetch:X".to_string()]);

  spawner.run_all();
  assert_eq!(*log.lock().unwrap(), vec!["notify".to_string(), "fetch:X".to_string(), "sub:X".to_string()]);
}

#[test]
fn notify_precedes_fetch_and_fetch_precedes_dispatch() {
  let log: Log = Arc::default();
  let service = TestService::new(&["a", "b"], &log);
  let mut listener = InstructionListener::new(countdown(2), service, TestFanout::default(), DeferredSpawner::default())
    .with_config(inline());
  listener.subscribe(recording(&log, "sub"));

  assert_eq!(block_on(listener.start_listening()), Ok(2));
  let expected: Vec<String> =
    ["notify", "fetch:a", "sub:a", "notify", "fetch:b", "sub:b"].iter().map(|s| (*s).to_string()).collect();
  assert_eq!(*log.lock().unwrap(), expected);
}

#[test]
fn notify_failure_stops_the_loop_before_fetching() {
  let log: Log = Arc::default();
  let mut service = TestService::new(&["a"], &log);
  service.fail_notify = true;
  let spawner = DeferredSpawner::default();
  let mut listener = InstructionListener::new(countdown(5), service, TestFanout::default(), spawner.clone());

  assert_eq!(block_on(listener.start_listening()), Err(TestError::NotifyRejected));
  assert_eq!(*log.lock().unwrap(), vec!["notify".to_string()]);
  assert_eq!(listener.service().instructions.len(), 1);
  assert_eq!(spawner.pending(), 0);
}

#[test]
fn fetch_failure_propagates_without_dispatch() {
  let log: Log = Arc::default();
  let mut service = TestService::new(&["a"], &log);
  service.fail_fetch = true;
  let spawner = DeferredSpawner::default();
  let mut listener = InstructionListener::new(countdown(5), service, TestFanout::default(), spawner.clone());

  assert_eq!(block_on(listener.start_listening()), Err(TestError::FetchRejected));
  assert_eq!(spawner.pending(), 0);
}

#[test]
fn late_subscribers_miss_already_fetched_instructions() {
  let log: Log = Arc::default();
  let spawner = DeferredSpawner::default();
  let mut listener =
    InstructionListener::new(countdown(1), TestService::new(&["early"], &log), TestFanout::default(), spawner.clone());
  listener.subscribe(recording(&log, "before"));

  assert_eq!(block_on(listener.start_listening()), Ok(1));
  listener.subscribe(recording(&log, "after"));
  assert_eq!(listener.fanout().handler_count(), 2);

  spawner.run_all();
  let entries = log.lock().unwrap().clone();
  assert!(entries.contains(&"before:early".to_string()));
  assert!(!entries.iter().any(|entry| entry.starts_with("after:")));
}

#[test]
fn inline_mode_delivers_before_returning() {
  let log: Log = Arc::default();
  let spawner = DeferredSpawner::default();
  let mut listener =
    InstructionListener::new(countdown(1), TestService::new(&["now"], &log), TestFanout::default(), spawner.clone())
      .with_config(inline());
  listener.subscribe(recording(&log, "first"));
  listener.subscribe(recording(&log, "second"));

  assert_eq!(block_on(listener.start_listening()), Ok(1));
  assert_eq!(spawner.pending(), 0);
  let entries = log.lock().unwrap().clone();
  assert_eq!(&entries[2..], &["first:now".to_string(), "second:now".to_string()]);
}

#[test]
fn closed_gate_stops_after_the_current_cycle() {
  let log: Log = Arc::default();
  let gate = ListenGate::new();
  let closer = gate.clone();
  let service = TestService::new(&["one", "two"], &log);
  let mut listener =
    InstructionListener::new(gate, service, TestFanout::default(), DeferredSpawner::default()).with_config(inline());
  listener.subscribe(InstructionHandler::new(move |_instruction: String| closer.close()));

  assert_eq!(block_on(listener.start_listening()), Ok(1));
  assert_eq!(listener.service().instructions.len(), 1);
}

#[test]
fn queue_backed_service_feeds_the_listener() {
  let queue = ArcShared::new(TestQueue::default());
  queue.push(5);
  queue.push(6);
  let service = QueueInstructionService::new(QueueFetcher::<_, _, crate::concurrent::SignalOnce>::new(queue.clone()), || Ok::<(), TestError>(()));
  let received = Arc::new(Mutex::new(Vec::new()));
  let sink = received.clone();
  let fanout = QueueFanout { handlers: Arc::default() };
  let mut listener =
    InstructionListener::new(countdown(2), service, fanout, DeferredSpawner::default()).with_config(inline());
  listener.subscribe(InstructionHandler::new(move |value: u32| sink.lock().unwrap().push(value)));

  assert_eq!(block_on(listener.start_listening()), Ok(2));
  assert_eq!(*received.lock().unwrap(), vec![5, 6]);
  assert_eq!(queue.pop_count(), 2);
}

#[test]
fn subscriber_registered_during_a_suspended_fetch_receives_the_instruction() {
  let queue = ArcShared::new(TestQueue::default());
  let service = QueueInstructionService::new(QueueFetcher::<_, _, crate::concurrent::SignalOnce>::new(queue.clone()), || Ok::<(), TestError>(()));
  let fanout = QueueFanout { handlers: Arc::default() };
  let mut listener =
    InstructionListener::new(countdown(1), service, fanout, DeferredSpawner::default()).with_config(inline());
  let registry = listener.fanout().clone();
  let received = Arc::new(Mutex::new(Vec::new()));
  let sink = received.clone();
  let waker = noop_waker();
  let mut cx = Context::from_waker(&waker);

  let mut listening = pin!(listener.start_listening());
  assert!(listening.as_mut().poll(&mut cx).is_pending());
  assert!(listening.as_mut().poll(&mut cx).is_pending());
  assert_eq!(queue.pop_count(), 1);

  registry.subscribe(InstructionHandler::new(move |value: u32| sink.lock().unwrap().push(value)));
  queue.push(42);

  assert_eq!(listening.as_mut().poll(&mut cx), Poll::Ready(Ok(1)));
  assert_eq!(*received.lock().unwrap(), vec![42]);
}

#[derive(Clone)]
struct QueueFanout {
  handlers: Arc<Mutex<Vec<InstructionHandler<u32>>>>,
}

impl InstructionFanout<u32> for QueueFanout {
  type Subscription = ();

  fn subscribe(&self, handler: InstructionHandler<u32>) -> Self::Subscription {
    self.handlers.lock().unwrap().push(handler);
  }

  fn snapshot(&self) -> Vec<InstructionHandler<u32>> {
    self.handlers.lock().unwrap().clone()
  }
}
