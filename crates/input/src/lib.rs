//! Input mapping: polled key and scroll state turned into actions.
//!
//! # Invariants
//! - Device polling stays with the windowing collaborator. This crate only
//!   sees "is this key held" and a scroll delta per frame.
//! - Key types are generic so any backend's key enum can be bound.

pub mod action;
pub mod binds;

pub use action::{Action, frame_actions};
pub use binds::{KeyBinds, MOVE_SPEED};

pub fn crate_info() -> &'static str {
    "tileworld-input v0.1.0"
}
