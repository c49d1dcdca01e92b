//! Minimal entity-component registry.
//!
//! Each component type gets its own storage keyed by `EntityId`. Component
//! types are not declared ahead of time: the first write or storage lookup of
//! a type assigns it a `KindId` and creates its storage.
//!
//! # Invariants
//! - Entity ids are issued in increasing order and never reused.
//! - An entity holds at most one component of each kind; writes overwrite.
//! - A kind's storage, once created, is the one used for every later access.
//! - Entities and components are never removed.

mod registry;
mod storage;

pub use registry::{Component, ComponentRegistry, KindId};
pub use storage::Storage;
pub use tileworld_common::EntityId;

pub fn crate_info() -> &'static str {
    "tileworld-ecs v0.1.0"
}
