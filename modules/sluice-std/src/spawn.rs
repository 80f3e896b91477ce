use core::future::Future;

use sluice_core_rs::DispatchSpawner;

/// Dispatch spawner built on top of `tokio::spawn`.
///
/// Must be used from within a Tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSpawner;

impl DispatchSpawner for TokioSpawner {
  fn spawn_dispatch(&self, task: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(task);
  }
}
