//! Developer tooling: read-only inspectors over the grid and the registry.

mod inspector;

pub use inspector::{GridInspector, GridSummary, KindInfo, RegistryInspector, RegistrySummary};

pub fn crate_info() -> &'static str {
    "tileworld-tools v0.1.0"
}
