use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

use super::*;

#[test]
fn clones_invoke_the_same_callback() {
  let calls = Arc::new(AtomicUsize::new(0));
  let calls_clone = calls.clone();
  let listener = PushListener::new(move || {
    calls_clone.fetch_add(1, Ordering::SeqCst);
  });

  let cloned = listener.clone();
  listener.notify();
  cloned.notify();

  assert_eq!(calls.load(Ordering::SeqCst), 2);
}
