use tileworld_kernel::TileGrid;

use crate::batch::TileSpriteMap;
use crate::camera::Camera2D;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the grid and a camera and produces output. It never
/// mutates the grid.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `grid` as seen through `camera`.
    fn render(&self, grid: &TileGrid, camera: &Camera2D) -> Self::Output;
}

/// Text renderer: one character per tile, north (highest y) row first.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    glyphs: TileSpriteMap<char>,
    /// Drawn for cells outside the grid and kinds with no glyph.
    blank: char,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(TileSpriteMap::ascii())
    }
}

impl AsciiRenderer {
    pub fn new(glyphs: TileSpriteMap<char>) -> Self {
        Self { glyphs, blank: ' ' }
    }

    pub fn with_blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    fn glyph(&self, grid: &TileGrid, x: i32, y: i32) -> char {
        grid.get(x, y)
            .and_then(|tile| self.glyphs.get(tile.kind).copied())
            .unwrap_or(self.blank)
    }

    /// Render the whole grid regardless of any camera.
    pub fn render_grid(&self, grid: &TileGrid) -> String {
        self.render(grid, &Camera2D::framing(grid))
    }
}

impl Renderer for AsciiRenderer {
    type Output = String;

    fn render(&self, grid: &TileGrid, camera: &Camera2D) -> String {
        let (x0, y0, x1, y1) = camera.visible_range(grid.tile_size());
        let mut out = String::new();
        for y in (y0..=y1).rev() {
            for x in x0..=x1 {
                out.push(self.glyph(grid, x, y));
            }
            out.push('\n');
        }
        out
    }
}
