//! Simulation tick
//!
//! One entry point advances the whole game by a variable timestep. The
//! update order inside a tick is fixed and observable:
//! player, projectiles, particles, pickups, enemies, spawn director,
//! collision resolution, game-over check.

use glam::Vec2;

use super::collision;
use super::state::{GamePhase, GameState};

/// Input sampled by the embedder for a single tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw movement intent; normalized inside the player update.
    pub move_dir: Vec2,
    /// Hold-to-fire button state.
    pub fire: bool,
    /// Pause toggle (edge, not level).
    pub pause: bool,
    /// Restart the match; honored in any phase.
    pub restart: bool,
}

/// Advances the game state by `dt` seconds.
///
/// `dt` is clamped to the configured maximum so a long hitch (a dropped
/// frame, a backgrounded tab) cannot tunnel entities through each other.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.restart();
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Playing,
            // Only a restart leaves GameOver.
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = dt.min(state.config.max_dt);
    state.elapsed += dt;

    let GameState {
        config,
        rng,
        elapsed,
        player,
        projectiles,
        enemy_projectiles,
        enemies,
        powerups,
        particles,
        spawner,
        events,
        ..
    } = state;

    player.update(
        dt,
        input.move_dir,
        input.fire,
        config,
        projectiles,
        particles,
        rng,
        events,
    );

    for shot in projectiles.iter_active_mut() {
        shot.update(dt, &config.playfield);
    }
    for shot in enemy_projectiles.iter_active_mut() {
        shot.update(dt, &config.playfield);
    }
    for particle in particles.iter_active_mut() {
        particle.update(dt);
    }
    for pickup in powerups.iter_active_mut() {
        pickup.update(dt, &config.playfield);
    }

    let player_pos = player.pos;
    for enemy in enemies.iter_active_mut() {
        enemy.update(
            dt,
            player_pos,
            &config.enemy,
            &config.playfield,
            enemy_projectiles,
            rng,
            events,
        );
    }

    spawner.tick(dt, *elapsed, enemies, config, rng);

    collision::resolve(state);

    if state.player.is_dead() && state.phase == GamePhase::Playing {
        state.game_over();
    }
}
