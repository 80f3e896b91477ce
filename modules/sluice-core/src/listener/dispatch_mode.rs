/// How an [`InstructionListener`](super::InstructionListener) hands instructions to subscribers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DispatchMode {
  /// Spawn the delivery through the [`DispatchSpawner`](super::DispatchSpawner) and move on to the
  /// next iteration without waiting for subscribers.
  #[default]
  Detached,
  /// Deliver on the loop itself before the next predicate check. Subscribers see instructions in
  /// fetch order, and a slow subscriber delays the next fetch.
  Inline,
}
