//! Rendering adapter: what a drawing backend needs from the tile world.
//!
//! # Invariants
//! - Renderers read the grid and never mutate it.
//! - The tile kind to visual mapping is configuration passed in by the
//!   caller; `TileKind` itself carries no drawing data.
//!
//! The window, sprite sheet and GPU batching live outside this crate. A
//! backend supplies its own sprite handle type `S` through `TileSpriteMap<S>`
//! and draws the placements in a `TileBatch<S>`. `AsciiRenderer` is the
//! built-in text backend used by the CLI and tests.

mod batch;
mod camera;
mod renderer;

pub use batch::{RenderError, SpritePlacement, TileBatch, TileSpriteMap};
pub use camera::{Camera2D, MIN_ZOOM, ZOOM_SPEED};
pub use renderer::{AsciiRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "tileworld-render v0.1.0"
}
