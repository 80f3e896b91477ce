//! In-memory push queue shared by unit tests.

use std::{
  collections::VecDeque,
  sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc, Mutex,
  },
};

use crate::collections::{Maybe, PushListener, PushQueue};

type Listeners = Arc<Mutex<Vec<(u64, PushListener)>>>;

#[derive(Default)]
pub(crate) struct TestQueue {
  items:     Mutex<VecDeque<u32>>,
  listeners: Listeners,
  next_id:   AtomicU64,
  pops:      AtomicUsize,
}

impl TestQueue {
  pub(crate) fn push(&self, item: u32) {
    self.items.lock().unwrap().push_back(item);
    self.announce_push();
  }

  pub(crate) fn announce_push(&self) {
    let snapshot: Vec<PushListener> = self.listeners.lock().unwrap().iter().map(|(_, l)| l.clone()).collect();
    for listener in snapshot {
      listener.notify();
    }
  }

  pub(crate) fn pop_count(&self) -> usize {
    self.pops.load(Ordering::SeqCst)
  }

  pub(crate) fn listener_count(&self) -> usize {
    self.listeners.lock().unwrap().len()
  }
}

pub(crate) struct TestSubscription {
  listeners: Listeners,
  id:        u64,
}

impl Drop for TestSubscription {
  fn drop(&mut self) {
    self.listeners.lock().unwrap().retain(|(id, _)| *id != self.id);
  }
}

impl PushQueue<u32> for TestQueue {
  type Subscription = TestSubscription;

  fn pop(&self) -> Maybe<u32> {
    self.pops.fetch_add(1, Ordering::SeqCst);
    self.items.lock().unwrap().pop_front().into()
  }

  fn subscribe_pushed(&self, listener: PushListener) -> Self::Subscription {
    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
    self.listeners.lock().unwrap().push((id, listener));
    TestSubscription { listeners: self.listeners.clone(), id }
  }
}

