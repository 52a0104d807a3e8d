//! All game entity types. Pure data; the only behaviour here is rectangle
//! geometry.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box in world units (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap: rectangles that only share an edge do not collide,
    /// and empty rectangles never collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && other.w > 0.0
            && other.h > 0.0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Enumerations ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Body colour of the player; changed by power-ups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Red,
    Yellow,
}

/// Colour tag of a platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Grass,
    Brick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Long invincibility.
    Star,
    /// One extra life.
    Mushroom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    LevelComplete,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Set when the last vertical pass landed on a platform.
    pub grounded: bool,
    pub facing: Facing,
    pub jumping: bool,
    pub lives: u32,
    /// Frames of invincibility left.
    pub invincible: u32,
    pub collected_coins: u32,
    pub tint: Tint,
}

impl Player {
    pub fn is_invincible(&self) -> bool {
        self.invincible > 0
    }
}

// ── Level geometry & actors ───────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub surface: Surface,
}

/// Walks back and forth; never removed, even when stomped.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub vx: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub rect: Rect,
    /// Cycles through `0..COIN_PHASE_PERIOD`.
    pub phase: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    /// Bounce phase in radians.
    pub phase: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    /// Coins still on screen.
    pub coins: Vec<Coin>,
    /// Power-ups still on screen.
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    /// Simulated frames since the last reset.
    pub frame: u64,
}

impl GameState {
    /// True once the level has been won or lost.
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::Playing
    }
}
