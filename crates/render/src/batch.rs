use std::collections::HashMap;

use glam::Vec2;
use tileworld_kernel::{TileGrid, TileKind};

/// Errors from building draw data.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no sprite mapped for tile kind {0}")]
    MissingSprite(TileKind),
}

/// Tile kind to visual handle mapping, owned by the rendering side.
#[derive(Debug, Clone)]
pub struct TileSpriteMap<S> {
    sprites: HashMap<TileKind, S>,
}

impl<S> Default for TileSpriteMap<S> {
    fn default() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }
}

impl<S> TileSpriteMap<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: TileKind, sprite: S) -> Self {
        self.sprites.insert(kind, sprite);
        self
    }

    pub fn insert(&mut self, kind: TileKind, sprite: S) -> Option<S> {
        self.sprites.insert(kind, sprite)
    }

    pub fn get(&self, kind: TileKind) -> Option<&S> {
        self.sprites.get(&kind)
    }

    /// Sprite for `kind`, or an error naming the unmapped kind.
    pub fn require(&self, kind: TileKind) -> Result<&S, RenderError> {
        self.get(kind).ok_or(RenderError::MissingSprite(kind))
    }

    /// Whether every tile kind has a sprite.
    pub fn is_complete(&self) -> bool {
        TileKind::ALL.iter().all(|k| self.sprites.contains_key(k))
    }
}

impl<S> FromIterator<(TileKind, S)> for TileSpriteMap<S> {
    fn from_iter<I: IntoIterator<Item = (TileKind, S)>>(iter: I) -> Self {
        Self {
            sprites: iter.into_iter().collect(),
        }
    }
}

impl TileSpriteMap<char> {
    /// One glyph per kind for text output.
    pub fn ascii() -> Self {
        Self::new()
            .with(TileKind::Water, '~')
            .with(TileKind::Dirt, '.')
            .with(TileKind::Grass, '"')
    }
}

/// One sprite drawn at a world position (the tile's lower-left corner).
#[derive(Debug, Clone, PartialEq)]
pub struct SpritePlacement<S> {
    pub sprite: S,
    pub position: Vec2,
}

/// Every tile of a grid resolved to a sprite and position, ready to hand to a
/// drawing backend in one batch.
#[derive(Debug, Clone)]
pub struct TileBatch<S> {
    placements: Vec<SpritePlacement<S>>,
}

impl<S: Clone> TileBatch<S> {
    /// Resolve every cell of `grid` through `sprites`.
    ///
    /// Tile `(x, y)` lands at `(x * tile_size, y * tile_size)`. Fails on the
    /// first kind with no sprite.
    pub fn build(grid: &TileGrid, sprites: &TileSpriteMap<S>) -> Result<Self, RenderError> {
        let _span = tracing::debug_span!("tile_batch", width = grid.width(), height = grid.height())
            .entered();
        let ts = grid.tile_size() as f32;
        let mut placements = Vec::with_capacity(grid.len());
        for (x, y, tile) in grid.iter() {
            let sprite = sprites.require(tile.kind)?.clone();
            placements.push(SpritePlacement {
                sprite,
                position: Vec2::new(x as f32 * ts, y as f32 * ts),
            });
        }
        tracing::trace!(placements = placements.len(), "tile batch built");
        Ok(Self { placements })
    }
}

impl<S> TileBatch<S> {
    pub fn placements(&self) -> &[SpritePlacement<S>] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
