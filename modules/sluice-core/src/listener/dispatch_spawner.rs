use core::future::Future;

/// Schedules dispatch tasks independently of the listener loop.
pub trait DispatchSpawner: Send + Sync {
  /// Spawns `task` without waiting for it.
  fn spawn_dispatch(&self, task: impl Future<Output = ()> + Send + 'static);
}
