use super::*;
use crate::listener::ContinuationPredicate;

#[test]
fn gate_closes_for_every_clone() {
  let mut gate = ListenGate::new();
  let remote = gate.clone();
  assert!(gate.proceed());

  remote.close();
  assert!(!gate.proceed());
  assert!(!remote.is_open());
}

#[test]
fn closures_act_as_predicates() {
  let mut remaining = 2;
  let mut predicate = move || {
    remaining -= 1;
    remaining >= 0
  };
  assert!(predicate.proceed());
  assert!(predicate.proceed());
  assert!(!predicate.proceed());
}
