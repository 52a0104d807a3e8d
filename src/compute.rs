//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`.  The only randomness
//! (coin placement, enemy start direction) comes through an injected RNG
//! when a level is built; `tick` itself is deterministic.

use log::info;
use rand::Rng;

use crate::collision::{check_collisions, take_damage, CollisionReport};
use crate::consts::*;
use crate::entities::{
    Coin, Enemy, Facing, GameState, GameStatus, Platform, Player, PowerUp, PowerUpKind, Rect,
    Surface, Tint,
};

// ── Input ─────────────────────────────────────────────────────────────────────

/// Horizontal intent for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    #[default]
    Stop,
}

/// Everything the player asked for this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub movement: Movement,
    /// Jump key pressed since the previous frame.
    pub jump: bool,
}

// ── Level layout ─────────────────────────────────────────────────────────────

const GROUND_HEIGHT: f32 = 50.0;

const BRICKS: [Rect; 8] = [
    Rect::new(200.0, 500.0, 200.0, 20.0),
    Rect::new(500.0, 400.0, 150.0, 20.0),
    Rect::new(300.0, 300.0, 200.0, 20.0),
    Rect::new(600.0, 250.0, 150.0, 20.0),
    Rect::new(100.0, 200.0, 100.0, 20.0),
    Rect::new(700.0, 550.0, 100.0, 20.0),
    Rect::new(400.0, 450.0, 100.0, 20.0),
    Rect::new(800.0, 350.0, 150.0, 20.0),
];

const ENEMY_SPAWNS: [(f32, f32); 3] = [(300.0, 450.0), (600.0, 200.0), (800.0, 300.0)];

const POWER_UP_SPAWNS: [(f32, f32, PowerUpKind); 2] = [
    (400.0, 250.0, PowerUpKind::Star),
    (750.0, 500.0, PowerUpKind::Mushroom),
];

/// Coins are placed at least this far from the left, right and top edges.
const COIN_MARGIN: i32 = 50;
/// ...and at least this far above the bottom edge.
const COIN_BOTTOM_MARGIN: i32 = 150;

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh player at the spawn point.
pub fn new_player() -> Player {
    Player {
        rect: Rect::new(SPAWN_X, SPAWN_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
        vx: 0.0,
        vy: 0.0,
        grounded: false,
        facing: Facing::Right,
        jumping: false,
        lives: STARTING_LIVES,
        invincible: 0,
        collected_coins: 0,
        tint: Tint::Red,
    }
}

/// Ground plus the floating brick platforms.
pub fn level_platforms() -> Vec<Platform> {
    let ground = Platform {
        rect: Rect::new(0.0, SCREEN_HEIGHT - GROUND_HEIGHT, SCREEN_WIDTH, GROUND_HEIGHT),
        surface: Surface::Grass,
    };
    std::iter::once(ground)
        .chain(BRICKS.iter().map(|&rect| Platform {
            rect,
            surface: Surface::Brick,
        }))
        .collect()
}

/// Build the initial game state.  Coin positions and enemy directions are
/// drawn from `rng`.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let enemies = ENEMY_SPAWNS
        .iter()
        .map(|&(x, y)| Enemy {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            vx: if rng.gen_bool(0.5) { -ENEMY_SPEED } else { ENEMY_SPEED },
        })
        .collect();

    let coins = (0..COIN_COUNT)
        .map(|_| {
            let x = rng.gen_range(COIN_MARGIN..=SCREEN_WIDTH as i32 - COIN_MARGIN);
            let y = rng.gen_range(COIN_MARGIN..=SCREEN_HEIGHT as i32 - COIN_BOTTOM_MARGIN);
            Coin {
                rect: Rect::new(x as f32, y as f32, COIN_SIZE, COIN_SIZE),
                phase: 0.0,
            }
        })
        .collect();

    let power_ups = POWER_UP_SPAWNS
        .iter()
        .map(|&(x, y, kind)| PowerUp {
            rect: Rect::new(x, y, POWER_UP_SIZE, POWER_UP_SIZE),
            kind,
            phase: 0.0,
        })
        .collect();

    GameState {
        player: new_player(),
        platforms: level_platforms(),
        enemies,
        coins,
        power_ups,
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── State machine ────────────────────────────────────────────────────────────

/// Rebuild the level after a win or a loss.  While the game is still being
/// played the state is returned unchanged.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.is_finished() {
        return state.clone();
    }
    info!("restarting after {:?} with score {}", state.status, state.score);
    init_state(rng)
}

/// Terminal conditions, checked once per frame.  Losing the last life wins
/// over collecting the last coin on the same frame.
pub fn evaluate_status(state: &GameState) -> GameStatus {
    if state.player.lives == 0 {
        GameStatus::GameOver
    } else if state.coins.is_empty() {
        GameStatus::LevelComplete
    } else {
        GameStatus::Playing
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  A finished game is frozen until
/// `restart`.
pub fn tick(state: &GameState, input: &TickInput) -> GameState {
    if state.is_finished() {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    if input.jump {
        jump(&mut next.player);
    }

    // ── 1–5. Player physics & collisions ─────────────────────────────────────
    let report = step_player(&mut next, input.movement);
    next.score += report.stomps * STOMP_SCORE;

    // ── 6. Enemies ────────────────────────────────────────────────────────────
    for enemy in &mut next.enemies {
        step_enemy(enemy, &next.platforms);
    }

    // ── 7. Animation ──────────────────────────────────────────────────────────
    animate(&mut next);

    // ── 8. Win / lose ─────────────────────────────────────────────────────────
    next.status = evaluate_status(&next);
    match next.status {
        GameStatus::GameOver => info!("game over at frame {}, score {}", next.frame, next.score),
        GameStatus::LevelComplete => info!(
            "level {} complete at frame {}, score {}",
            next.level, next.frame, next.score
        ),
        GameStatus::Playing => {}
    }

    next
}

/// Start a jump if standing on something.
pub fn jump(player: &mut Player) {
    if player.grounded {
        player.vy = JUMP_STRENGTH;
        player.jumping = true;
    }
}

pub fn apply_movement(player: &mut Player, movement: Movement) {
    match movement {
        Movement::Left => {
            player.vx = -PLAYER_SPEED;
            player.facing = Facing::Left;
        }
        Movement::Right => {
            player.vx = PLAYER_SPEED;
            player.facing = Facing::Right;
        }
        Movement::Stop => player.vx = 0.0,
    }
}

/// Gravity, movement and both collision passes for the player.
fn step_player(state: &mut GameState, movement: Movement) -> CollisionReport {
    let GameState {
        player,
        platforms,
        enemies,
        coins,
        power_ups,
        ..
    } = state;

    player.vy = (player.vy + GRAVITY).min(TERMINAL_VELOCITY);
    apply_movement(player, movement);

    // Horizontal pass
    player.rect.x += player.vx;
    let mut report = check_collisions(player, platforms, enemies, coins, power_ups);
    if player.rect.left() < 0.0 {
        player.rect.set_left(0.0);
    }
    if player.rect.right() > SCREEN_WIDTH {
        player.rect.set_right(SCREEN_WIDTH);
    }

    // Vertical pass
    player.rect.y += player.vy;
    player.grounded = false;
    report.merge(check_collisions(player, platforms, enemies, coins, power_ups));
    if player.rect.top() < 0.0 {
        player.rect.set_top(0.0);
        player.vy = 0.0;
    }
    if player.rect.bottom() > SCREEN_HEIGHT {
        respawn(player);
    }

    player.invincible = player.invincible.saturating_sub(1);
    report
}

/// Put a player who fell off the bottom back at the spawn point, at the
/// cost of one life.
pub fn respawn(player: &mut Player) {
    player.rect.set_left(SPAWN_X);
    player.rect.set_top(SPAWN_Y);
    player.vx = 0.0;
    player.vy = 0.0;
    take_damage(player);
    info!("player fell, respawned with {} lives", player.lives);
}

/// Walk and turn around on platform contact or at the screen edges.
pub fn step_enemy(enemy: &mut Enemy, platforms: &[Platform]) {
    enemy.rect.x += enemy.vx;

    for platform in platforms {
        if enemy.rect.overlaps(&platform.rect) {
            enemy.vx = -enemy.vx;
        }
    }

    if enemy.rect.left() <= 0.0 || enemy.rect.right() >= SCREEN_WIDTH {
        enemy.vx = -enemy.vx;
    }
}

fn animate(state: &mut GameState) {
    for coin in &mut state.coins {
        coin.phase = (coin.phase + COIN_PHASE_STEP) % COIN_PHASE_PERIOD;
    }
    for power_up in &mut state.power_ups {
        power_up.phase = (power_up.phase + POWER_UP_PHASE_STEP) % POWER_UP_PHASE_PERIOD;
    }
}
