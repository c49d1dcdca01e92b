use tileworld_pgen::{HeightField, NoiseField};

use crate::config::GeneratorConfig;
use crate::error::{MAX_DIMENSION, WorldGenError};
use crate::tilemap::{Tile, TileGrid, TileKind};

/// Builds island tile grids from a seed.
///
/// Cells are independent of each other and computed sequentially, x-major.
/// The generator holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    config: GeneratorConfig,
}

impl WorldGenerator {
    /// Create a generator, rejecting invalid configurations up front.
    pub fn new(config: GeneratorConfig) -> Result<Self, WorldGenError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The noise field this generator samples for `seed`.
    pub fn noise_field(&self, seed: i64) -> NoiseField {
        NoiseField::new(seed, self.config.octaves.clone(), self.config.exponent)
    }

    /// Generate a `map_size` x `map_size` island for `seed`.
    pub fn generate(
        &self,
        seed: i64,
        map_size: u32,
        tile_size: u32,
    ) -> Result<TileGrid, WorldGenError> {
        let _span = tracing::info_span!("generate_world", seed, map_size, tile_size).entered();
        let field = self.noise_field(seed);
        self.generate_from(&field, map_size, tile_size)
    }

    /// Generate from an arbitrary height field instead of seeded noise.
    pub fn generate_from<H: HeightField + ?Sized>(
        &self,
        field: &H,
        map_size: u32,
        tile_size: u32,
    ) -> Result<TileGrid, WorldGenError> {
        if map_size == 0 || map_size > MAX_DIMENSION {
            return Err(WorldGenError::InvalidMapSize(map_size));
        }
        if tile_size == 0 {
            return Err(WorldGenError::InvalidTileSize(tile_size));
        }

        let grid = TileGrid::from_fn(map_size, map_size, tile_size, |x, y| {
            Tile::new(self.classify(self.height_at(field, x, y, map_size)))
        })?;

        tracing::info!(
            water = grid.count(TileKind::Water),
            dirt = grid.count(TileKind::Dirt),
            grass = grid.count(TileKind::Grass),
            "world generated"
        );
        Ok(grid)
    }

    /// Final height of cell `(x, y)`, after the island blend when enabled.
    pub fn height_at<H: HeightField + ?Sized>(
        &self,
        field: &H,
        x: u32,
        y: u32,
        map_size: u32,
    ) -> f64 {
        let height = field.evaluate(f64::from(x), f64::from(y));
        if !self.config.island_falloff {
            return height;
        }
        let d = island_distance(x, y, map_size, self.config.island_exponent);
        (1.0 - d + height) / 2.0
    }

    pub fn classify(&self, height: f64) -> TileKind {
        self.config.classify(height)
    }
}

/// Radial falloff term for cell `(x, y)`: twice the distance from the map
/// centre in map-normalized units, raised to `exponent`.
///
/// 0 at the centre, 1 on the inscribed circle, 2 at the corners for
/// exponent 2.
pub fn island_distance(x: u32, y: u32, map_size: u32, exponent: f64) -> f64 {
    let size = f64::from(map_size);
    let dx = f64::from(x) / size - 0.5;
    let dy = f64::from(y) / size - 0.5;
    let d = (dx * dx + dy * dy).sqrt() * 2.0;
    d.powf(exponent)
}
