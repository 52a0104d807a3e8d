//! Game configuration constants.

// ── World ─────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 700.0;
/// Target simulation and render rate.
pub const FPS: u32 = 60;

// ── Physics (units per tick) ──────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.8;
pub const TERMINAL_VELOCITY: f32 = 20.0;
pub const JUMP_STRENGTH: f32 = -18.0;
pub const PLAYER_SPEED: f32 = 7.0;
/// Upward velocity after stomping an enemy.
pub const STOMP_BOUNCE: f32 = JUMP_STRENGTH / 1.5;
/// A falling player whose bottom is at most this far below an enemy's
/// vertical centre lands a stomp instead of taking damage.
pub const STOMP_TOLERANCE: f32 = 10.0;
pub const ENEMY_SPEED: f32 = 2.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;
pub const SPAWN_X: f32 = 100.0;
pub const SPAWN_Y: f32 = 100.0;
pub const STARTING_LIVES: u32 = 3;
/// Invincibility granted after taking a hit (1 s).
pub const HIT_INVINCIBILITY: u32 = 60;
/// Invincibility granted by a star (5 s).
pub const STAR_INVINCIBILITY: u32 = 300;

// ── Entities ──────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: f32 = 35.0;
pub const COIN_SIZE: f32 = 20.0;
pub const POWER_UP_SIZE: f32 = 30.0;
pub const COIN_COUNT: usize = 20;

// ── Animation ─────────────────────────────────────────────────────────────────

pub const COIN_PHASE_STEP: f32 = 0.2;
pub const COIN_PHASE_PERIOD: f32 = 10.0;
pub const POWER_UP_PHASE_STEP: f32 = 0.1;
/// Two decimal places of 2π.
pub const POWER_UP_PHASE_PERIOD: f32 = 6.28;

// ── Scoring ───────────────────────────────────────────────────────────────────

pub const STOMP_SCORE: u32 = 100;
