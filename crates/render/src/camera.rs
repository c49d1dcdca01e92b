use glam::Vec2;
use tileworld_kernel::{Tile, TileGrid};

/// Zoom change per unit of mouse scroll.
pub const ZOOM_SPEED: f32 = 0.1;
/// Zoom never drops to or below zero.
pub const MIN_ZOOM: f32 = 0.1;

/// Orthographic 2D camera over world space (+y up).
///
/// Camera motion lives outside the world state; nothing here touches the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// World position at the centre of the view.
    pub position: Vec2,
    pub zoom: f32,
    /// Viewport size in screen units.
    pub viewport: Vec2,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport: Vec2::new(1024.0, 768.0),
        }
    }
}

impl Camera2D {
    /// A camera at zoom 1 whose view covers exactly the whole grid.
    pub fn framing(grid: &TileGrid) -> Self {
        let ts = grid.tile_size() as f32;
        let size = Vec2::new(grid.width() as f32 * ts, grid.height() as f32 * ts);
        Self {
            position: size / 2.0,
            zoom: 1.0,
            viewport: size,
        }
    }

    /// Apply a vertical scroll delta to the zoom.
    pub fn apply_scroll(&mut self, scroll: f32) {
        if scroll != 0.0 {
            self.zoom = (self.zoom + ZOOM_SPEED * scroll).max(MIN_ZOOM);
        }
    }

    pub fn follow(&mut self, target: Vec2) {
        self.position = target;
    }

    /// World-space rectangle `(min, max)` covered by the view.
    pub fn visible_rect(&self) -> (Vec2, Vec2) {
        let half = self.viewport / (2.0 * self.zoom.max(MIN_ZOOM));
        (self.position - half, self.position + half)
    }

    /// Inclusive tile index bounds `(x0, y0, x1, y1)` touched by the view.
    ///
    /// May extend past the grid; callers cull through `TileGrid::get`.
    pub fn visible_range(&self, tile_size: u32) -> (i32, i32, i32, i32) {
        let ts = tile_size.max(1) as f32;
        let (min, max) = self.visible_rect();
        (
            (min.x / ts).floor() as i32,
            (min.y / ts).floor() as i32,
            (max.x / ts).ceil() as i32 - 1,
            (max.y / ts).ceil() as i32 - 1,
        )
    }

    /// Tiles inside the view, skipping coordinates outside the grid.
    pub fn visible_tiles<'a>(
        &self,
        grid: &'a TileGrid,
    ) -> impl Iterator<Item = (i32, i32, Tile)> + 'a {
        let (x0, y0, x1, y1) = self.visible_range(grid.tile_size());
        (x0..=x1).flat_map(move |x| {
            (y0..=y1).filter_map(move |y| grid.get(x, y).map(|tile| (x, y, tile)))
        })
    }

    /// Map a world position to screen coordinates (origin at the viewport's
    /// lower-left corner).
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.viewport / 2.0
    }
}
