use std::{
  fmt,
  future::Future,
  pin::Pin,
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
  task::{Context, Poll},
};

use sluice_core_rs::WaitHandleBackend;
use tokio::sync::{futures::Notified, Notify};


struct TokioWaitHandleInner {
  notify:   Notify,
  signaled: AtomicBool,
}

/// [`WaitHandleBackend`] built on Tokio's `Notify` primitive.
///
/// The first effective signal stores a `notify_one` permit, so a waiter that starts polling after
/// the signal still completes.
#[derive(Clone)]
pub struct TokioWaitHandle {
  inner: Arc<TokioWaitHandleInner>,
}

impl fmt::Debug for TokioWaitHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TokioWaitHandle").field("signaled", &self.is_signaled()).finish()
  }
}

impl WaitHandleBackend for TokioWaitHandle {
  type WaitFuture<'a>
    = TokioWait<'a>
  where
    Self: 'a;

  fn new() -> Self {
    Self { inner: Arc::new(TokioWaitHandleInner { notify: Notify::new(), signaled: AtomicBool::new(false) }) }
  }

  fn signal(&self) -> bool {
    if self.inner.signaled.swap(true, Ordering::AcqRel) {
      return false;
    }
    self.inner.notify.notify_one();
    true
  }

  fn is_signaled(&self) -> bool {
    self.inner.signaled.load(Ordering::Acquire)
  }

  fn wait(&self) -> Self::WaitFuture<'_> {
    TokioWait { signaled: &self.inner.signaled, notified: Box::pin(self.inner.notify.notified()) }
  }
}

/// Future returned by [`TokioWaitHandle::wait`](WaitHandleBackend::wait).
pub struct TokioWait<'a> {
  signaled: &'a AtomicBool,
  notified: Pin<Box<Notified<'a>>>,
}

impl Future for TokioWait<'_> {
  type Output = ();

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    if self.signaled.load(Ordering::Acquire) {
      return Poll::Ready(());
    }
    self.notified.as_mut().poll(cx)
  }
}
