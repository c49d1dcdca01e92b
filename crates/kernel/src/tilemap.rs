use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{MAX_DIMENSION, WorldGenError};

/// Discrete terrain classification of a grid cell.
///
/// Variants are declared in height order: water below dirt below grass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TileKind {
    Water = 0,
    Dirt = 1,
    Grass = 2,
}

impl TileKind {
    pub const ALL: [TileKind; 3] = [TileKind::Water, TileKind::Dirt, TileKind::Grass];

    pub fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Dirt => "dirt",
            Self::Grass => "grass",
        }
    }

    pub fn is_land(self) -> bool {
        !matches!(self, Self::Water)
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single grid cell. Plain value, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
}

impl Tile {
    pub const fn new(kind: TileKind) -> Self {
        Self { kind }
    }
}

/// Rectangular grid of tiles indexed by `(x, y)`.
///
/// Cells are stored column-major in one allocation (`x * height + y`), which
/// keeps every column the same length by construction. Single cells can be
/// replaced in place through [`TileGrid::set`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct TileGrid {
    tile_size: u32,
    width: u32,
    height: u32,
    cells: Vec<Tile>,
}

#[derive(Deserialize)]
struct GridRepr {
    tile_size: u32,
    width: u32,
    height: u32,
    cells: Vec<Tile>,
}

impl TryFrom<GridRepr> for TileGrid {
    type Error = WorldGenError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        Self::from_cells(repr.width, repr.height, repr.tile_size, repr.cells)
    }
}

impl TileGrid {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(
        width: u32,
        height: u32,
        tile_size: u32,
        fill: TileKind,
    ) -> Result<Self, WorldGenError> {
        Self::from_fn(width, height, tile_size, |_, _| Tile::new(fill))
    }

    /// Create a grid by evaluating `f(x, y)` for every cell, x-major.
    pub fn from_fn(
        width: u32,
        height: u32,
        tile_size: u32,
        mut f: impl FnMut(u32, u32) -> Tile,
    ) -> Result<Self, WorldGenError> {
        check_shape(width, height, tile_size)?;
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                cells.push(f(x, y));
            }
        }
        Ok(Self {
            tile_size,
            width,
            height,
            cells,
        })
    }

    /// Wrap an existing column-major cell vector.
    pub fn from_cells(
        width: u32,
        height: u32,
        tile_size: u32,
        cells: Vec<Tile>,
    ) -> Result<Self, WorldGenError> {
        check_shape(width, height, tile_size)?;
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(WorldGenError::GridShape {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            tile_size,
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge length of one tile in world units. Only consumers use this.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Tile at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Replace the tile at `(x, y)` and return the previous one.
    ///
    /// Returns `None` and leaves the grid untouched when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> Option<Tile> {
        let i = self.index(x, y)?;
        Some(std::mem::replace(&mut self.cells[i], tile))
    }

    /// Iterate every cell as `(x, y, tile)`, x-major.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Tile)> + '_ {
        let height = self.height as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, tile)| ((i / height) as u32, (i % height) as u32, *tile))
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|t| t.kind == kind).count()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stable content hash over dimensions, tile size and every cell kind.
    ///
    /// SHA-256 truncated to 64 bits; equal grids hash equal on every platform.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(self.tile_size.to_le_bytes());
        let kinds: Vec<u8> = self.cells.iter().map(|t| t.kind as u8).collect();
        hasher.update(&kinds);
        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x as usize * self.height as usize + y as usize)
    }
}

fn check_shape(width: u32, height: u32, tile_size: u32) -> Result<(), WorldGenError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(WorldGenError::InvalidDimensions { width, height });
    }
    if tile_size == 0 {
        return Err(WorldGenError::InvalidTileSize(tile_size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped(width: u32, height: u32) -> TileGrid {
        TileGrid::from_fn(width, height, 16, |x, _| {
            Tile::new(TileKind::ALL[x as usize % 3])
        })
        .unwrap()
    }

    #[test]
    fn dimensions_match_construction() {
        let grid = TileGrid::filled(5, 3, 8, TileKind::Dirt).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.tile_size(), 8);
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.count(TileKind::Dirt), 15);
    }

    #[test]
    fn get_in_bounds_and_out() {
        let grid = striped(4, 4);
        for x in 0..4 {
            for y in 0..4 {
                assert!(grid.get(x, y).is_some(), "({x},{y}) should exist");
            }
        }
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(i32::MIN, i32::MAX), None);
    }

    #[test]
    fn non_square_indexing_uses_x_then_y() {
        let grid = TileGrid::from_fn(3, 2, 1, |x, y| {
            Tile::new(if x == 2 && y == 1 {
                TileKind::Grass
            } else {
                TileKind::Water
            })
        })
        .unwrap();
        assert_eq!(grid.get(2, 1), Some(Tile::new(TileKind::Grass)));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.count(TileKind::Grass), 1);
    }

    #[test]
    fn set_replaces_single_cell() {
        let mut grid = TileGrid::filled(3, 3, 16, TileKind::Water).unwrap();
        let prev = grid.set(1, 2, Tile::new(TileKind::Grass));
        assert_eq!(prev, Some(Tile::new(TileKind::Water)));
        assert_eq!(grid.get(1, 2), Some(Tile::new(TileKind::Grass)));
        assert_eq!(grid.count(TileKind::Grass), 1);
        assert_eq!(grid.len(), 9);
    }

    #[test]
    fn set_out_of_bounds_is_noop() {
        let mut grid = TileGrid::filled(2, 2, 16, TileKind::Water).unwrap();
        let before = grid.clone();
        assert_eq!(grid.set(2, 0, Tile::new(TileKind::Grass)), None);
        assert_eq!(grid.set(0, -1, Tile::new(TileKind::Grass)), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn zero_sizes_rejected() {
        assert!(matches!(
            TileGrid::filled(0, 3, 16, TileKind::Water),
            Err(WorldGenError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            TileGrid::filled(3, 0, 16, TileKind::Water),
            Err(WorldGenError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            TileGrid::filled(3, 3, 0, TileKind::Water),
            Err(WorldGenError::InvalidTileSize(0))
        ));
    }

    #[test]
    fn from_cells_checks_length() {
        let cells = vec![Tile::new(TileKind::Dirt); 5];
        let err = TileGrid::from_cells(2, 3, 16, cells).unwrap_err();
        assert!(matches!(
            err,
            WorldGenError::GridShape {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn iter_visits_every_cell_with_coords() {
        let grid = striped(3, 2);
        let visited: Vec<(u32, u32)> = grid.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
        for (x, y, tile) in grid.iter() {
            assert_eq!(grid.get(x as i32, y as i32), Some(tile));
        }
    }

    #[test]
    fn content_hash_tracks_cells() {
        let a = striped(4, 4);
        let mut b = a.clone();
        assert_eq!(a.content_hash(), b.content_hash());
        b.set(0, 0, Tile::new(TileKind::Grass));
        assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn serde_rejects_malformed_grid() {
        let grid = striped(2, 2);
        let json = serde_json::to_string(&grid).unwrap();
        let back: TileGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        let bad = r#"{"tile_size":16,"width":2,"height":2,"cells":[{"kind":"water"}]}"#;
        assert!(serde_json::from_str::<TileGrid>(bad).is_err());
    }

    #[test]
    fn tile_kind_ordering_and_names() {
        assert!(TileKind::Water < TileKind::Dirt);
        assert!(TileKind::Dirt < TileKind::Grass);
        assert_eq!(TileKind::Grass.to_string(), "grass");
        assert!(!TileKind::Water.is_land());
        assert!(TileKind::Dirt.is_land());
    }
}
