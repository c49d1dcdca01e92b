use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle naming a game object.
///
/// Ids are issued in increasing order by the component registry and are never
/// reused, so ordering ids gives issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Raw numeric value of the id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-space position in the same units as `tile_size` (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Tile coordinate containing this position, for a grid with the given
    /// tile edge length.
    pub fn tile_coord(&self, tile_size: u32) -> (i32, i32) {
        let size = tile_size.max(1) as f32;
        (
            (self.0.x / size).floor() as i32,
            (self.0.y / size).floor() as i32,
        )
    }
}
