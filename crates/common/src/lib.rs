//! Shared value types used across the tileworld crates.

mod types;

pub use types::{EntityId, Position};

pub fn crate_info() -> &'static str {
    "tileworld-common v0.1.0"
}
