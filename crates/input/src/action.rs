use glam::Vec2;

use crate::binds::KeyBinds;

/// A high-level action produced from one frame of input.
///
/// Game logic consumes actions, never raw key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move the bound pawn by a world-space delta.
    Move(Vec2),
    /// Change camera zoom by a scroll delta.
    Zoom(f32),
    /// Leave the game loop.
    Quit,
    /// Nothing bound was held this frame.
    Noop,
}

/// Map one polled frame to actions for a single pawn.
///
/// `quit` is checked first; a quitting frame yields only `Quit`. A frame with
/// no movement and no scroll yields a single `Noop`, so every frame produces
/// at least one action.
pub fn frame_actions<K>(
    binds: &KeyBinds<K>,
    is_pressed: impl Fn(&K) -> bool,
    scroll: f32,
    quit: bool,
) -> Vec<Action> {
    if quit {
        return vec![Action::Quit];
    }
    let mut actions = Vec::new();
    let delta = binds.movement(is_pressed, crate::binds::MOVE_SPEED);
    if delta != Vec2::ZERO {
        actions.push(Action::Move(delta));
    }
    if scroll != 0.0 {
        actions.push(Action::Zoom(scroll));
    }
    if actions.is_empty() {
        actions.push(Action::Noop);
    }
    actions
}
