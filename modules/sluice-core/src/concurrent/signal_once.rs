use core::{
  fmt,
  future::Future,
  pin::Pin,
  task::{Context, Poll, Waker},
};

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex;

use super::WaitHandleBackend;
use crate::sync::ArcShared;


const STATE_PENDING: u8 = 0;
const STATE_SIGNALED: u8 = 1;

struct SignalOnceNode {
  state: AtomicU8,
  waker: Mutex<Option<Waker>>,
}

impl SignalOnceNode {
  const fn new() -> Self {
    Self { state: AtomicU8::new(STATE_PENDING), waker: Mutex::new(None) }
  }

  fn signal(&self) -> bool {
    if self.state.compare_exchange(STATE_PENDING, STATE_SIGNALED, Ordering::AcqRel, Ordering::Acquire).is_err() {
      return false;
    }

    if let Some(waker) = self.waker.lock().take() {
      waker.wake();
    }
    true
  }

  fn is_signaled(&self) -> bool {
    self.state.load(Ordering::Acquire) == STATE_SIGNALED
  }

  fn poll(&self, cx: &mut Context<'_>) -> Poll<()> {
    if self.is_signaled() {
      return Poll::Ready(());
    }

    {
      let mut slot = self.waker.lock();
      match slot.as_ref() {
        | Some(existing) if existing.will_wake(cx.waker()) => {},
        | _ => *slot = Some(cx.waker().clone()),
      }
    }

    // signal() flips the state before taking the waker, so a signal racing with the store above
    // is observed here.
    if self.is_signaled() {
      self.waker.lock().take();
      Poll::Ready(())
    } else {
      Poll::Pending
    }
  }
}

/// Runtime-agnostic [`WaitHandleBackend`] built on an atomic state and a stored waker.
#[derive(Clone)]
pub struct SignalOnce {
  node: ArcShared<SignalOnceNode>,
}

impl fmt::Debug for SignalOnce {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SignalOnce").field("signaled", &self.node.is_signaled()).finish()
  }
}

impl WaitHandleBackend for SignalOnce {
  type WaitFuture<'a> = SignalOnceWait<'a>;

  fn new() -> Self {
    Self { node: ArcShared::new(SignalOnceNode::new()) }
  }

  fn signal(&self) -> bool {
    self.node.signal()
  }

  fn is_signaled(&self) -> bool {
    self.node.is_signaled()
  }

  fn wait(&self) -> Self::WaitFuture<'_> {
    SignalOnceWait { node: &self.node }
  }
}

/// Future returned by [`SignalOnce::wait`](WaitHandleBackend::wait).
pub struct SignalOnceWait<'a> {
  node: &'a SignalOnceNode,
}

impl Future for SignalOnceWait<'_> {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    self.node.poll(cx)
  }
}
