//! Collision detection and resolution
//!
//! Everything is a circle, so detection is a squared-distance compare. The
//! resolver runs after all movement in a tick and applies its four rules in a
//! fixed order:
//!
//! 1. player shots vs enemies
//! 2. enemy shots vs the player
//! 3. enemy bodies vs the player
//! 4. pickups vs the player
//!
//! The order is observable (a shot can kill an enemy in the same tick the
//! enemy would have rammed the player) and must not be rearranged.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::enemy::EnemyKind;
use super::particle;
use super::pool::EntityPool;
use super::powerup::{PowerUp, PowerUpKind};
use super::state::{GameEvent, GameState};
use crate::config::PowerUpTuning;

/// Strict overlap test. Exact tangency is a miss.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Resolves all collisions for the tick.
pub(crate) fn resolve(state: &mut GameState) {
    let GameState {
        config,
        rng,
        player,
        projectiles,
        enemy_projectiles,
        enemies,
        powerups,
        particles,
        events,
        ..
    } = state;

    // Rule 1: player shots vs enemies. A projectile is spent on its first
    // hit, so two overlapping enemies cost two shots.
    for shot in projectiles.iter_active_mut() {
        for enemy in enemies.iter_active_mut() {
            if !circles_overlap(shot.pos, shot.radius, enemy.pos, enemy.radius) {
                continue;
            }
            shot.active = false;
            enemy.apply_hit();
            if enemy.is_dead() {
                enemy.active = false;
                player.score += match enemy.kind() {
                    EnemyKind::Kamikaze => config.score.kamikaze_kill,
                    _ => config.score.standard_kill,
                };
                events.push(GameEvent::Explosion { pos: enemy.pos });
                particle::spawn_explosion(particles, rng, enemy.pos, 14);
                roll_drop(powerups, rng, enemy.pos, &config.powerup);
            }
            break;
        }
    }

    // Rule 2: enemy shots vs the player. The projectile is consumed even
    // while the player is invulnerable; damage routing decides the rest.
    for shot in enemy_projectiles.iter_active_mut() {
        if circles_overlap(shot.pos, shot.radius, player.pos, player.radius) {
            shot.active = false;
            player.apply_damage(1, config, events);
        }
    }

    // Rule 3: enemy bodies vs the player. The rammer always dies; the damage
    // goes through the same immunity rules as a shot, so an active shield
    // covers ramming too.
    for enemy in enemies.iter_active_mut() {
        if circles_overlap(enemy.pos, enemy.radius, player.pos, player.radius) {
            enemy.active = false;
            events.push(GameEvent::Explosion { pos: enemy.pos });
            // Rams burst bigger than shot kills.
            particle::spawn_explosion(particles, rng, enemy.pos, 16);
            player.apply_damage(1, config, events);
        }
    }

    // Rule 4: pickups vs the player.
    for pickup in powerups.iter_active_mut() {
        if circles_overlap(pickup.pos, pickup.radius, player.pos, player.radius) {
            pickup.active = false;
            player.apply_power_up(pickup.kind, config, events);
        }
    }
}

/// Rolls the drop chance over a fresh kill; on success spawns a pickup of a
/// weighted-random kind at the death position.
fn roll_drop(
    powerups: &mut EntityPool<PowerUp>,
    rng: &mut Pcg32,
    pos: Vec2,
    tuning: &PowerUpTuning,
) {
    if rng.random::<f32>() >= tuning.drop_chance {
        return;
    }
    let Some(slot) = powerups.spawn() else {
        return;
    };
    let kind = PowerUpKind::roll(rng, tuning);
    slot.activate(pos, kind, tuning);
}
