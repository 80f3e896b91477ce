//! Tokio bindings for `sluice-core-rs`.
//!
//! This crate provides a mutex-backed push queue, a wait handle built on Tokio's `Notify`, a
//! subscriber hub for the instruction listener and a spawner built on `tokio::spawn`, so that the
//! runtime-agnostic primitives of the core crate can be used from a standard Tokio application.

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
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_async)]
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

mod instruction_hub;
mod shared_push_queue;
mod spawn;
mod subscriber_registry;
mod tokio_listener;
mod tokio_wait_handle;

pub use instruction_hub::{InstructionHub, InstructionSubscription};
pub use shared_push_queue::{SharedPushQueue, SharedPushSubscription};
pub use sluice_core_rs::{
  ArcShared, ContinuationPredicate, DispatchMode, InstructionHandler, InstructionListener, InstructionService, ListenGate,
  ListenerConfig, Maybe, PushListener, PushQueue, QueueFetcher, QueueInstructionService,
};
pub use spawn::TokioSpawner;
pub use tokio_listener::{tokio_instruction_listener, tokio_queue_fetcher, TokioInstructionListener, TokioQueueFetcher};
pub use tokio_wait_handle::{TokioWait, TokioWaitHandle};
