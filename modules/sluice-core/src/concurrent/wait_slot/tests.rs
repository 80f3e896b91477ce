use std::{sync::Arc, thread};

use super::*;
use crate::{
  collections::Maybe,
  concurrent::{FetchAttempt, SignalOnce, WaitHandleBackend},
};

#[test]
fn signal_while_idle_is_a_no_op() {
  let slot: WaitSlot<SignalOnce> = WaitSlot::new();
  assert!(!slot.signal());
  assert!(!slot.is_waiting());
  assert_eq!(slot.signaled_count(), 0);
}

#[test]
fn present_pop_skips_allocation() {
  let slot: WaitSlot<SignalOnce> = WaitSlot::new();
  match slot.pop_or_arm(|| Maybe::new(11)) {
    | FetchAttempt::Ready(value) => assert_eq!(value, 11),
    | FetchAttempt::Armed(_) => panic!("a present pop must not arm the slot"),
  }
  assert_eq!(slot.armed_count(), 0);
  assert!(!slot.is_waiting());
}

#[test]
fn empty_pop_arms_and_first_signal_fires_once() {
  let slot: WaitSlot<SignalOnce> = WaitSlot::new();
  let FetchAttempt::Armed(handle) = slot.pop_or_arm(Maybe::<u8>::empty) else {
    panic!("an empty pop must arm the slot");
  };

  assert!(slot.is_waiting());
  assert!(slot.signal());
  assert!(!slot.signal());
  assert!(handle.is_signaled());
  assert_eq!(slot.signaled_count(), 1);

  assert!(slot.disarm());
  assert!(!slot.disarm());
  assert!(!slot.signal());
  assert_eq!(slot.disarmed_count(), 1);
}

#[test]
fn concurrent_notifications_signal_a_handle_once() {
  let slot: Arc<WaitSlot<SignalOnce>> = Arc::new(WaitSlot::new());
  let FetchAttempt::Armed(handle) = slot.pop_or_arm(Maybe::<u8>::empty) else {
    panic!("an empty pop must arm the slot");
  };

  let notifiers: Vec<_> = (0..8)
    .map(|_| {
      let slot = slot.clone();
      thread::spawn(move || slot.signal())
    })
    .collect();
  let fired = notifiers.into_iter().map(|join| join.join().unwrap()).filter(|fired| *fired).count();

  assert_eq!(fired, 1);
  assert_eq!(slot.signaled_count(), 1);
  assert!(handle.is_signaled());
}
