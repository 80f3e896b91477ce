use core::{fmt, marker::PhantomData};

use super::{FetchAttempt, SignalOnce, WaitHandleBackend, WaitSlot};
use crate::{
  collections::{Maybe, PushListener, PushQueue},
  sync::ArcShared,
};


/// Fetch-or-wait accessor over a [`PushQueue`].
///
/// [`fetch_item`](QueueFetcher::fetch_item) returns an already-available item without suspending,
/// or parks the calling task on a signal-once handle until the queue reports a push. The fetcher
/// subscribes to the pushed notification on construction and keeps the subscription until it is
/// dropped.
///
/// `fetch_item` borrows the fetcher mutably, so a fetcher has at most one suspended caller.
/// Several fetchers may share a queue; a fetcher that loses the race for a pushed item treats the
/// wake as spurious and waits again.
pub struct QueueFetcher<T, Q, B = SignalOnce>
where
  Q: PushQueue<T>,
  B: WaitHandleBackend, {
  queue:         ArcShared<Q>,
  slot:          ArcShared<WaitSlot<B>>,
  _subscription: Q::Subscription,
  _pd:           PhantomData<fn() -> T>,
}

impl<T, Q, B> QueueFetcher<T, Q, B>
where
  Q: PushQueue<T>,
  B: WaitHandleBackend,
{
  /// Wraps `queue` and subscribes to its pushed notification.
  ///
  /// # Arguments
  ///
  /// * `queue` - Queue to fetch from; the fetcher stays subscribed to it until dropped
  ///
  /// # Returns
  ///
  /// An idle fetcher
  pub fn new(queue: ArcShared<Q>) -> Self {
    let slot = ArcShared::new(WaitSlot::new());
    let notified = slot.clone();
    let subscription = queue.subscribe_pushed(PushListener::new(move || {
      notified.signal();
    }));
    Self { queue, slot, _subscription: subscription, _pd: PhantomData }
  }

  /// Removes and returns the next item, suspending until one is pushed if the queue is empty.
  ///
  /// Dropping the returned future while it is suspended returns the fetcher to idle.
  pub async fn fetch_item(&mut self) -> T {
    let mut woken = false;
    loop {
      let handle = match self.slot.pop_or_arm(|| self.queue.pop()) {
        | FetchAttempt::Ready(item) => {
          if !woken {
            tracing::trace!("queue fetch served without suspending");
          }
          return item;
        },
        | FetchAttempt::Armed(handle) => handle,
      };

      if woken {
        tracing::debug!("spurious wake: queue still empty after signal, waiting again");
      } else {
        tracing::trace!("queue empty, waiting for a push");
      }

      let guard = DisarmOnDrop { slot: &self.slot };
      handle.wait().await;
      drop(guard);
      woken = true;
    }
  }

  /// Pops without suspending, under the same lock as [`fetch_item`](QueueFetcher::fetch_item).
  #[must_use]
  pub fn try_fetch(&self) -> Maybe<T> {
    self.slot.try_pop(|| self.queue.pop())
  }

  /// Returns `true` while a fetch is suspended.
  #[must_use]
  pub fn is_waiting(&self) -> bool {
    self.slot.is_waiting()
  }

  /// Shared handle to the wait slot, for inspecting its counters.
  #[must_use]
  pub const fn slot(&self) -> &ArcShared<WaitSlot<B>> {
    &self.slot
  }
}

impl<T, Q, B> fmt::Debug for QueueFetcher<T, Q, B>
where
  Q: PushQueue<T>,
  B: WaitHandleBackend,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("QueueFetcher").field("slot", &*self.slot).finish()
  }
}

/// Clears the slot once the waiter resumes or its future is dropped mid-wait.
struct DisarmOnDrop<'a, B>
where
  B: WaitHandleBackend, {
  slot: &'a WaitSlot<B>,
}

impl<B> Drop for DisarmOnDrop<'_, B>
where
  B: WaitHandleBackend,
{
  fn drop(&mut self) {
    self.slot.disarm();
  }
}
