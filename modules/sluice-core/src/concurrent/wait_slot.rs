use core::fmt;

use portable_atomic::{AtomicU64, Ordering};
use spin::Mutex;

use super::{FetchAttempt, WaitHandleBackend, WaitState};
use crate::collections::Maybe;

#[cfg(test)]
mod tests;

/// Per-fetcher wait state machine with states {Idle, Waiting}.
///
/// Every transition happens under one lock. The empty check and the handle allocation share a
/// critical section with the notification path, so a push landing between "pop returned empty"
/// and "handle stored" cannot be lost. The handle is removed from the slot before the waiter
/// releases its own clone, so a late notification can never reach a released handle.
pub struct WaitSlot<B> {
  state:    Mutex<WaitState<B>>,
  armed:    AtomicU64,
  signaled: AtomicU64,
  disarmed: AtomicU64,
}

impl<B> WaitSlot<B>
where
  B: WaitHandleBackend,
{
  /// Creates an idle slot.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state:    Mutex::new(WaitState::Idle),
      armed:    AtomicU64::new(0),
      signaled: AtomicU64::new(0),
      disarmed: AtomicU64::new(0),
    }
  }

  /// Runs `pop` under the slot lock and arms a fresh handle when it comes back empty.
  ///
  /// The lock is held only for the duration of `pop` plus the handle allocation.
  pub fn pop_or_arm<T, F>(&self, pop: F) -> FetchAttempt<T, B>
  where
    F: FnOnce() -> Maybe<T>, {
    let mut state = self.state.lock();
    if let Some(item) = pop().into_option() {
      return FetchAttempt::Ready(item);
    }

    if state.is_waiting() {
      tracing::warn!("wait slot re-armed while a handle was still stored; replacing it");
    }
    let handle = B::new();
    *state = WaitState::Waiting(handle.clone());
    self.armed.fetch_add(1, Ordering::Relaxed);
    FetchAttempt::Armed(handle)
  }

  /// Runs `pop` under the slot lock without arming.
  pub fn try_pop<T, F>(&self, pop: F) -> Maybe<T>
  where
    F: FnOnce() -> Maybe<T>, {
    let _state = self.state.lock();
    pop()
  }

  /// Signals the stored handle, if any. No-op while idle.
  ///
  /// Returns `true` when this call moved a stored handle into the signaled state.
  pub fn signal(&self) -> bool {
    let state = self.state.lock();
    match &*state {
      | WaitState::Waiting(handle) => {
        let fired = handle.signal();
        if fired {
          self.signaled.fetch_add(1, Ordering::Relaxed);
        }
        fired
      },
      | WaitState::Idle => false,
    }
  }

  /// Clears the stored handle and returns to idle.
  ///
  /// The slot's clone of the handle is dropped after the lock is released. Returns `true` when a
  /// handle was stored.
  pub fn disarm(&self) -> bool {
    let previous = core::mem::take(&mut *self.state.lock());
    match previous {
      | WaitState::Waiting(handle) => {
        self.disarmed.fetch_add(1, Ordering::Relaxed);
        drop(handle);
        true
      },
      | WaitState::Idle => false,
    }
  }

  /// Returns `true` while a consumer is suspended.
  #[must_use]
  pub fn is_waiting(&self) -> bool {
    self.state.lock().is_waiting()
  }

  /// Number of handles allocated so far.
  #[must_use]
  pub fn armed_count(&self) -> u64 {
    self.armed.load(Ordering::Relaxed)
  }

  /// Number of stored handles that were effectively signaled.
  #[must_use]
  pub fn signaled_count(&self) -> u64 {
    self.signaled.load(Ordering::Relaxed)
  }

  /// Number of handles removed from the slot.
  #[must_use]
  pub fn disarmed_count(&self) -> u64 {
    self.disarmed.load(Ordering::Relaxed)
  }
}

impl<B> Default for WaitSlot<B>
where
  B: WaitHandleBackend,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<B> fmt::Debug for WaitSlot<B>
where
  B: WaitHandleBackend,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WaitSlot")
      .field("waiting", &self.is_waiting())
      .field("armed", &self.armed_count())
      .field("signaled", &self.signaled_count())
      .field("disarmed", &self.disarmed_count())
      .finish()
  }
}
