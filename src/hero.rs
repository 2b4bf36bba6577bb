use glam::Vec2;

use crate::input::{ActionMap, InputSource, InputState, KeyCode};

/// The hero sheet is sliced into this many rows and columns.
pub const HERO_ROWS: u32 = 4;
pub const HERO_COLS: u32 = 3;
/// Walk-cycle frames per second.
pub const FRAME_RATE: f64 = 5.0;
/// Movement speed in window pixels per second.
pub const HERO_SPEED: f32 = 50.0;
pub const HERO_SCALE: f32 = 2.0;

/// Which way the hero looks; selects a row of the hero sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Down,
    Right,
    Up,
}

impl Facing {
    /// Index of the first frame of this facing's walk cycle.
    pub fn frame_offset(self) -> u32 {
        let row = match self {
            Facing::Left => 0,
            Facing::Down => 1,
            Facing::Right => 2,
            Facing::Up => 3,
        };
        row * HERO_COLS
    }
}

/// Sprite-frame animator for the player character.
#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    /// Top-left corner in window pixels.
    pub position: Vec2,
    pub facing: Facing,
    pub running: bool,
    frame: u32,
}

impl Hero {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            facing: Facing::Right,
            running: false,
            frame: Facing::Right.frame_offset(),
        }
    }

    /// Current cell of the hero sheet.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Move by `(dx, dy)` window pixels; `now` is a clock in seconds that
    /// drives the walk cycle.
    ///
    /// Vertical movement decides the facing over horizontal movement.  When
    /// the hero stands still the last frame is kept.
    pub fn move_by(&mut self, dx: f32, dy: f32, now: f64) {
        self.running = dx != 0.0 || dy != 0.0;
        self.position += Vec2::new(dx, dy);

        if dx < 0.0 {
            self.facing = Facing::Left;
        }
        if dx > 0.0 {
            self.facing = Facing::Right;
        }
        if dy < 0.0 {
            self.facing = Facing::Up;
        }
        if dy > 0.0 {
            self.facing = Facing::Down;
        }

        if self.running {
            let step = ((now * FRAME_RATE).floor() as i64).rem_euclid(HERO_COLS as i64) as u32;
            self.frame = self.facing.frame_offset() + step;
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// Keyboard bindings that steer the hero.
#[derive(Debug, Clone)]
pub struct HeroControls {
    actions: ActionMap<Move>,
}

impl HeroControls {
    /// Arrow keys.
    pub fn arrows() -> Self {
        let mut actions = ActionMap::new();
        actions.bind(Move::Left, InputSource::Key(KeyCode::ArrowLeft));
        actions.bind(Move::Right, InputSource::Key(KeyCode::ArrowRight));
        actions.bind(Move::Up, InputSource::Key(KeyCode::ArrowUp));
        actions.bind(Move::Down, InputSource::Key(KeyCode::ArrowDown));
        Self { actions }
    }

    pub fn bind(&mut self, action: Move, source: InputSource) {
        self.actions.bind(action, source);
    }

    /// Offset to travel this tick given the held keys; opposite keys cancel.
    pub fn offset(&self, input: &InputState, dt: f32) -> (f32, f32) {
        let speed = dt * HERO_SPEED;
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.actions.is_held(Move::Left, input) {
            dx -= speed;
        }
        if self.actions.is_held(Move::Right, input) {
            dx += speed;
        }
        if self.actions.is_held(Move::Up, input) {
            dy -= speed;
        }
        if self.actions.is_held(Move::Down, input) {
            dy += speed;
        }
        (dx, dy)
    }
}

impl Default for HeroControls {
    fn default() -> Self {
        Self::arrows()
    }
}
