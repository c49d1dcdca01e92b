use glam::Vec2;

/// World units a pawn moves per frame while a direction key is held.
pub const MOVE_SPEED: f32 = 2.0;

/// Four directional keys bound to one pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinds<K> {
    pub up: K,
    pub down: K,
    pub left: K,
    pub right: K,
}

impl<K> KeyBinds<K> {
    pub fn new(up: K, down: K, left: K, right: K) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Per-frame movement for the keys currently held.
    ///
    /// Opposite keys cancel. Diagonals are not normalized, matching a pawn
    /// that steps each axis independently.
    pub fn movement(&self, is_pressed: impl Fn(&K) -> bool, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if is_pressed(&self.left) {
            delta.x -= speed;
        }
        if is_pressed(&self.right) {
            delta.x += speed;
        }
        if is_pressed(&self.up) {
            delta.y += speed;
        }
        if is_pressed(&self.down) {
            delta.y -= speed;
        }
        delta
    }
}

impl KeyBinds<char> {
    pub fn wasd() -> Self {
        Self::new('w', 's', 'a', 'd')
    }

    pub fn ijkl() -> Self {
        Self::new('i', 'k', 'j', 'l')
    }
}
