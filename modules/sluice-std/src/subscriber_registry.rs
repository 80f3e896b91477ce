use std::sync::{
  atomic::{AtomicU64, Ordering},
  Mutex, MutexGuard,
};


/// Id-keyed subscriber list shared by the push queue and the instruction hub.
///
/// Entries keep registration order. Poisoned locks are recovered, so a panicking subscriber
/// cannot wedge registration.
pub(crate) struct SubscriberRegistry<L> {
  next_id: AtomicU64,
  entries: Mutex<Vec<(u64, L)>>,
}

impl<L> Default for SubscriberRegistry<L> {
  fn default() -> Self {
    Self { next_id: AtomicU64::new(1), entries: Mutex::new(Vec::new()) }
  }
}

impl<L> SubscriberRegistry<L> {
  fn lock_entries(&self) -> MutexGuard<'_, Vec<(u64, L)>> {
    self.entries.lock().unwrap_or_else(|err| err.into_inner())
  }

  /// Registers the entry built by `make` and returns its id.
  ///
  /// # Arguments
  ///
  /// * `make` - Builds the stored entry from the id assigned to it
  ///
  /// # Returns
  ///
  /// The id to hand to [`SubscriberRegistry::unregister`]
  pub(crate) fn register<F>(&self, make: F) -> u64
  where
    F: FnOnce(u64) -> L, {
    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
    let entry = make(id);
    self.lock_entries().push((id, entry));
    id
  }

  /// Removes the entry registered under `id`. Returns `false` if it was already gone.
  pub(crate) fn unregister(&self, id: u64) -> bool {
    let mut guard = self.lock_entries();
    match guard.iter().position(|(entry_id, _)| *entry_id == id) {
      | Some(index) => {
        guard.remove(index);
        true
      },
      | None => false,
    }
  }

  pub(crate) fn count(&self) -> usize {
    self.lock_entries().len()
  }

  /// Clones the current entries so they can be invoked without holding the lock.
  pub(crate) fn snapshot(&self) -> Vec<L>
  where
    L: Clone, {
    self.lock_entries().iter().map(|(_, entry)| entry.clone()).collect()
  }
}
