//! World kernel: the tile grid and deterministic island generation.
//!
//! # Invariants
//! - Generation is pure with respect to `(seed, map_size, config)`. Two calls
//!   with the same inputs produce bit-identical grids.
//! - `tile_size` is carried for consumers and never influences tile kinds.
//! - Grid queries outside the bounds return `None`, never panic.

pub mod config;
pub mod error;
pub mod generator;
pub mod tilemap;

pub use config::GeneratorConfig;
pub use error::WorldGenError;
pub use generator::{WorldGenerator, island_distance};
pub use tilemap::{Tile, TileGrid, TileKind};

pub fn crate_info() -> &'static str {
    "tileworld-kernel v0.1.0"
}
