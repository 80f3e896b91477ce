#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![deny(clippy::cmp_null)]
#![cfg_attr(not(test), no_std)]

//! sluice core library
//!
//! Runtime-agnostic building blocks for consuming a push-notifying queue from async code.
//!
//! # Key Features
//! - [`Maybe`]: zero-or-one value returned by non-blocking pops
//! - [`PushQueue`]: contract for queues that announce pushes to subscribers
//! - [`QueueFetcher`]: fetch-or-wait accessor that never misses a push notification
//! - [`InstructionListener`]: notify/fetch/dispatch loop that fans instructions out to subscribers
//!
//! Tokio bindings live in `sluice-std-rs`.

extern crate alloc;

/// Value containers and the push-queue contract.
pub mod collections;
/// Wait handles, the wait slot state machine and the queue fetcher.
pub mod concurrent;
/// Instruction listener loop and its collaborators.
pub mod listener;
/// Shared ownership helpers.
pub mod sync;

#[cfg(test)]
mod test_support;

pub use collections::{Maybe, PushListener, PushQueue};
pub use concurrent::{FetchAttempt, QueueFetcher, SignalOnce, WaitHandleBackend, WaitSlot, WaitState};
pub use listener::{
  ContinuationPredicate, DispatchMode, DispatchSpawner, InstructionDispatch, InstructionFanout, InstructionHandler,
  InstructionListener, InstructionService, ListenGate, ListenerConfig, QueueInstructionService,
};
pub use sync::ArcShared;
