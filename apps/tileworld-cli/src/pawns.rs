use glam::Vec2;
use tileworld_common::{EntityId, Position};
use tileworld_ecs::ComponentRegistry;
use tileworld_input::{Action, KeyBinds, frame_actions};
use tileworld_kernel::{TileGrid, TileKind};
use tileworld_render::Camera2D;

/// Ticks each scripted key is held before moving to the next direction.
pub const STEP_TICKS: u64 = 8;

/// Name of the sprite a pawn is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteName(pub String);

/// A pawn as seen after the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct PawnReport {
    pub id: EntityId,
    pub sprite: String,
    pub position: Vec2,
    /// `None` when the pawn has walked off the grid.
    pub tile: Option<TileKind>,
}

/// Two pawns on one grid, driven by scripted key presses.
pub struct PawnDemo<'g> {
    grid: &'g TileGrid,
    registry: ComponentRegistry,
    pawns: Vec<EntityId>,
    camera: Camera2D,
    tick: u64,
}

impl<'g> PawnDemo<'g> {
    /// Spawn a WASD pawn and an IJKL pawn at the centre of `grid`.
    pub fn new(grid: &'g TileGrid) -> Self {
        let ts = grid.tile_size() as f32;
        let centre = Vec2::new(grid.width() as f32 * ts, grid.height() as f32 * ts) / 2.0;

        let mut registry = ComponentRegistry::new();
        let mut pawns = Vec::new();
        for (sprite, binds) in [("pawn_a", KeyBinds::wasd()), ("pawn_b", KeyBinds::ijkl())] {
            let id = registry.new_entity();
            registry.write(id, Position(centre));
            registry.write(id, SpriteName(sprite.to_string()));
            registry.write(id, binds);
            tracing::debug!(%id, sprite, "pawn spawned");
            pawns.push(id);
        }

        let mut camera = Camera2D::default();
        camera.follow(centre);
        Self {
            grid,
            registry,
            pawns,
            camera,
            tick: 0,
        }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one frame. Returns `false` once a pawn asked to quit.
    pub fn step(&mut self) -> bool {
        let mut moves = Vec::new();
        let mut quit = false;
        for (index, id) in self.pawns.iter().enumerate() {
            let Some(binds) = self.registry.read::<KeyBinds<char>>(*id) else {
                continue;
            };
            let held = scripted_key(binds, self.tick, index);
            for action in frame_actions(binds, |k| *k == held, 0.0, false) {
                match action {
                    Action::Move(delta) => moves.push((*id, delta)),
                    Action::Zoom(scroll) => self.camera.apply_scroll(scroll),
                    Action::Quit => quit = true,
                    Action::Noop => {}
                }
            }
        }

        for (id, delta) in moves {
            if let Some(pos) = self.registry.read_mut::<Position>(id) {
                pos.0 += delta;
            }
        }
        if let Some(lead) = self.pawns.first().and_then(|id| self.registry.read::<Position>(*id)) {
            self.camera.follow(lead.0);
        }

        self.tick += 1;
        !quit
    }

    pub fn run(&mut self, ticks: u64) {
        let _span = tracing::info_span!("pawn_demo", ticks).entered();
        for _ in 0..ticks {
            if !self.step() {
                break;
            }
        }
    }

    pub fn report(&self) -> Vec<PawnReport> {
        let mut out = Vec::new();
        self.registry.for_each::<Position>(|id, pos| {
            let (tx, ty) = pos.tile_coord(self.grid.tile_size());
            let sprite = self
                .registry
                .read::<SpriteName>(id)
                .map(|s| s.0.clone())
                .unwrap_or_default();
            out.push(PawnReport {
                id,
                sprite,
                position: pos.0,
                tile: self.grid.get(tx, ty).map(|t| t.kind),
            });
        });
        out
    }
}

/// Key held by pawn `index` at `tick`: up, right, down, left in turn, each
/// for [`STEP_TICKS`]. Each pawn starts half a cycle after the previous one.
pub fn scripted_key(binds: &KeyBinds<char>, tick: u64, index: usize) -> char {
    let order = [binds.up, binds.right, binds.down, binds.left];
    let phase = (tick / STEP_TICKS + 2 * index as u64) % 4;
    order[phase as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileworld_input::MOVE_SPEED;
    use tileworld_kernel::WorldGenerator;

    fn grid() -> TileGrid {
        TileGrid::filled(32, 32, 16, TileKind::Grass).unwrap()
    }

    #[test]
    fn pawns_spawn_at_centre_with_components() {
        let grid = grid();
        let demo = PawnDemo::new(&grid);
        let reports = demo.report();
        assert_eq!(reports.len(), 2);
        for r in &reports {
            assert_eq!(r.position, Vec2::new(256.0, 256.0));
            assert_eq!(r.tile, Some(TileKind::Grass));
            assert!(demo.registry().has::<KeyBinds<char>>(r.id));
        }
        assert_eq!(reports[0].sprite, "pawn_a");
        assert_eq!(reports[1].sprite, "pawn_b");
    }

    #[test]
    fn script_cycles_directions() {
        let binds = KeyBinds::wasd();
        assert_eq!(scripted_key(&binds, 0, 0), 'w');
        assert_eq!(scripted_key(&binds, STEP_TICKS, 0), 'd');
        assert_eq!(scripted_key(&binds, 2 * STEP_TICKS, 0), 's');
        assert_eq!(scripted_key(&binds, 3 * STEP_TICKS, 0), 'a');
        assert_eq!(scripted_key(&binds, 4 * STEP_TICKS, 0), 'w');
        assert_eq!(scripted_key(&KeyBinds::ijkl(), 0, 1), 'k');
    }

    #[test]
    fn pawns_move_in_opposite_directions() {
        let grid = grid();
        let mut demo = PawnDemo::new(&grid);
        demo.run(STEP_TICKS);

        let travel = MOVE_SPEED * STEP_TICKS as f32;
        let reports = demo.report();
        assert_eq!(reports[0].position, Vec2::new(256.0, 256.0 + travel));
        assert_eq!(reports[1].position, Vec2::new(256.0, 256.0 - travel));
        assert_eq!(demo.camera().position, reports[0].position);
        assert_eq!(demo.tick(), STEP_TICKS);
    }

    #[test]
    fn full_cycle_returns_home() {
        let grid = grid();
        let mut demo = PawnDemo::new(&grid);
        demo.run(4 * STEP_TICKS);
        for r in demo.report() {
            assert_eq!(r.position, Vec2::new(256.0, 256.0));
        }
    }

    #[test]
    fn pawn_off_grid_has_no_tile() {
        let grid = TileGrid::filled(1, 1, 4, TileKind::Dirt).unwrap();
        let mut demo = PawnDemo::new(&grid);
        demo.run(STEP_TICKS);
        assert!(demo.report().iter().all(|r| r.tile.is_none()));
    }

    #[test]
    fn generated_island_centre_is_reported() {
        let grid = WorldGenerator::default().generate(42, 64, 16).unwrap();
        let demo = PawnDemo::new(&grid);
        let expected = grid.get(32, 32).map(|t| t.kind);
        assert!(demo.report().iter().all(|r| r.tile == expected));
    }
}
