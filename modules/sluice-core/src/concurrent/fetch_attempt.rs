/// Result of one pop attempt made under the wait slot lock.
#[derive(Debug)]
pub enum FetchAttempt<T, B> {
  /// The pop produced an item; no handle was allocated.
  Ready(T),
  /// The pop observed an empty queue and the returned handle was stored in the slot.
  Armed(B),
}
