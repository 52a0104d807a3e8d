//! Rectangle collision resolution between the player and everything else.
//!
//! The resolver runs twice per frame, once after the horizontal move and
//! once after the vertical move, against the same player. It mutates the
//! player and the collectible collections in place and reports what
//! happened so the caller can settle the score.

use log::debug;

use crate::consts::{
    HIT_INVINCIBILITY, STAR_INVINCIBILITY, STOMP_BOUNCE, STOMP_TOLERANCE,
};
use crate::entities::{Coin, Enemy, Platform, Player, PowerUp, PowerUpKind, Tint};

/// What a single resolver pass did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    /// Enemies landed on from above.
    pub stomps: u32,
    /// Lives lost to enemy contact.
    pub hits_taken: u32,
    pub coins_collected: u32,
    /// Power-ups picked up, in pickup order.
    pub power_ups: Vec<PowerUpKind>,
}

impl CollisionReport {
    pub fn merge(&mut self, other: CollisionReport) {
        self.stomps += other.stomps;
        self.hits_taken += other.hits_taken;
        self.coins_collected += other.coins_collected;
        self.power_ups.extend(other.power_ups);
    }
}

// ── Full pass ─────────────────────────────────────────────────────────────────

/// One resolver pass: platforms, then enemies, then coins, then power-ups.
pub fn check_collisions(
    player: &mut Player,
    platforms: &[Platform],
    enemies: &[Enemy],
    coins: &mut Vec<Coin>,
    power_ups: &mut Vec<PowerUp>,
) -> CollisionReport {
    resolve_platforms(player, platforms);
    let (stomps, hits_taken) = resolve_enemies(player, enemies);
    let coins_collected = collect_coins(player, coins);
    let power_ups = collect_power_ups(player, power_ups);

    CollisionReport {
        stomps,
        hits_taken,
        coins_collected,
        power_ups,
    }
}

// ── Platforms ─────────────────────────────────────────────────────────────────

/// Push the player out of every overlapping platform.
///
/// Exactly one branch fires per platform, in priority order: falling,
/// rising, moving right, moving left. While `vy != 0` a side contact is
/// therefore resolved as a landing or a head bump, never as a wall.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) {
    for platform in platforms {
        if !player.rect.overlaps(&platform.rect) {
            continue;
        }
        if player.vy > 0.0 {
            player.rect.set_bottom(platform.rect.top());
            player.vy = 0.0;
            player.grounded = true;
            player.jumping = false;
        } else if player.vy < 0.0 {
            player.rect.set_top(platform.rect.bottom());
            player.vy = 0.0;
        } else if player.vx > 0.0 {
            player.rect.set_right(platform.rect.left());
        } else if player.vx < 0.0 {
            player.rect.set_left(platform.rect.right());
        }
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Stomp or get hurt by each overlapping enemy. Returns `(stomps, hits)`.
///
/// Nothing happens while the player is invincible. A stomp bounces the
/// player but leaves the enemy in place.
pub fn resolve_enemies(player: &mut Player, enemies: &[Enemy]) -> (u32, u32) {
    let mut stomps = 0;
    let mut hits = 0;

    for enemy in enemies {
        if player.is_invincible() || !player.rect.overlaps(&enemy.rect) {
            continue;
        }
        if player.vy > 0.0 && player.rect.bottom() <= enemy.rect.center_y() + STOMP_TOLERANCE {
            debug!("stomped enemy at ({}, {})", enemy.rect.x, enemy.rect.y);
            player.vy = STOMP_BOUNCE;
            player.jumping = true;
            stomps += 1;
        } else if take_damage(player) {
            hits += 1;
        }
    }

    (stomps, hits)
}

/// Lose one life unless invincible. Returns whether a life was lost.
pub fn take_damage(player: &mut Player) -> bool {
    if player.is_invincible() {
        return false;
    }
    player.lives = player.lives.saturating_sub(1);
    player.invincible = HIT_INVINCIBILITY;
    debug!("player hit, {} lives left", player.lives);
    true
}

// ── Collectibles ──────────────────────────────────────────────────────────────

/// Remove every coin touching the player. Returns how many were taken.
///
/// Each coin is tested exactly once against the player as it stands after
/// platform and enemy resolution.
pub fn collect_coins(player: &mut Player, coins: &mut Vec<Coin>) -> u32 {
    let before = coins.len();
    let rect = player.rect;
    coins.retain(|coin| !rect.overlaps(&coin.rect));

    let taken = (before - coins.len()) as u32;
    if taken > 0 {
        player.collected_coins += taken;
        debug!("collected {} coin(s), {} remaining", taken, coins.len());
    }
    taken
}

/// Remove and apply every power-up touching the player.
pub fn collect_power_ups(player: &mut Player, power_ups: &mut Vec<PowerUp>) -> Vec<PowerUpKind> {
    let mut taken = Vec::new();
    power_ups.retain(|power_up| {
        if player.rect.overlaps(&power_up.rect) {
            apply_power_up(player, power_up.kind);
            taken.push(power_up.kind);
            false
        } else {
            true
        }
    });
    taken
}

pub fn apply_power_up(player: &mut Player, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Star => {
            player.invincible = STAR_INVINCIBILITY;
            player.tint = Tint::Yellow;
        }
        PowerUpKind::Mushroom => {
            player.lives += 1;
            player.tint = Tint::Red;
        }
    }
    debug!("power-up {:?} applied", kind);
}
