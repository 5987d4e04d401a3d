//! The player ship
//!
//! A singleton owned by `GameState`: created once at startup and reset on
//! restart, never destroyed. Movement, fire cooldown, health, the timed
//! shield, the post-hit invulnerability window, and the rapid-fire buff all
//! live here.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::particle::{self, Particle};
use super::pool::EntityPool;
use super::projectile::{Owner, Projectile};
use super::state::GameEvent;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Seconds until the next shot is allowed.
    pub cooldown: f32,
    /// Current seconds between shots; differs from the configured base while
    /// the rapid buff is active.
    pub fire_interval: f32,
    /// Seconds until `fire_interval` reverts to base. Zero means no pending
    /// reversion. Decremented inside `update`, so it pauses with the game
    /// and dies with `reset`.
    pub rapid_timer: f32,
    pub health: u32,
    /// Seconds of damage immunity after a hit.
    pub invuln: f32,
    /// Timed shield: seconds remaining. While positive, hits are absorbed
    /// without touching health. Decays with dt only; absorbing a hit does
    /// not shorten it.
    pub shield: f32,
    pub score: u32,
    trail_timer: f32,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            radius: 0.0,
            speed: 0.0,
            cooldown: 0.0,
            fire_interval: 0.0,
            rapid_timer: 0.0,
            health: 0,
            invuln: 0.0,
            shield: 0.0,
            score: 0,
            trail_timer: 0.0,
        };
        player.reset(config);
        player
    }

    /// Restores the startup state, cancelling any pending rapid reversion.
    pub fn reset(&mut self, config: &Config) {
        let tuning = &config.player;
        self.pos = Vec2::new(
            config.playfield.width / 2.0,
            config.playfield.height - tuning.spawn_height,
        );
        self.radius = tuning.radius;
        self.speed = tuning.speed;
        self.cooldown = 0.0;
        self.fire_interval = tuning.fire_interval;
        self.rapid_timer = 0.0;
        self.health = tuning.max_health;
        self.invuln = 0.0;
        self.shield = 0.0;
        self.score = 0;
        self.trail_timer = 0.0;
    }

    /// Advances one tick: movement, timers, and firing.
    ///
    /// `move_dir` is the raw intent vector; it is normalized here so that
    /// diagonal movement is no faster than axis-aligned movement.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        move_dir: Vec2,
        fire: bool,
        config: &Config,
        projectiles: &mut EntityPool<Projectile>,
        particles: &mut EntityPool<Particle>,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
    ) {
        let field = &config.playfield;
        self.pos += move_dir.normalize_or_zero() * self.speed * dt;
        self.pos = self.pos.clamp(
            Vec2::splat(self.radius),
            Vec2::new(field.width - self.radius, field.height - self.radius),
        );

        self.cooldown = (self.cooldown - dt).max(0.0);
        self.invuln = (self.invuln - dt).max(0.0);
        self.shield = (self.shield - dt).max(0.0);

        if self.rapid_timer > 0.0 {
            self.rapid_timer = (self.rapid_timer - dt).max(0.0);
            if self.rapid_timer == 0.0 {
                self.fire_interval = config.player.fire_interval;
            }
        }

        if fire && self.cooldown == 0.0 {
            self.shoot(config, projectiles, particles, rng, events);
        }

        // Steady engine exhaust while alive.
        self.trail_timer += dt;
        if self.trail_timer > 0.03 {
            self.trail_timer = 0.0;
            let stern = self.pos + Vec2::new(0.0, 8.0);
            particle::spawn_trail(particles, rng, stern + Vec2::new(-6.0, 0.0), 1.2);
            particle::spawn_trail(particles, rng, stern + Vec2::new(6.0, 0.0), 1.2);
        }
    }

    /// Fires one shot straight up. No-op while cooling down or when the
    /// projectile pool is saturated; only a successful spawn resets the
    /// cooldown.
    pub fn shoot(
        &mut self,
        config: &Config,
        projectiles: &mut EntityPool<Projectile>,
        particles: &mut EntityPool<Particle>,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
    ) {
        if self.cooldown > 0.0 {
            return;
        }
        let tuning = &config.player;
        let Some(slot) = projectiles.spawn() else {
            return;
        };
        slot.activate(
            self.pos - Vec2::new(0.0, tuning.muzzle_offset),
            Vec2::new(0.0, -tuning.projectile_speed),
            tuning.projectile_radius,
            Owner::Player,
        );
        self.cooldown = self.fire_interval;
        events.push(GameEvent::Shoot);
        particle::spawn_trail(particles, rng, self.pos + Vec2::new(0.0, 6.0), 6.0);
    }

    /// Applies incoming damage, subject to the immunity rules: ignored while
    /// invulnerable, absorbed while the timed shield holds, otherwise health
    /// drops and the grace window opens.
    pub fn apply_damage(&mut self, amount: u32, config: &Config, events: &mut Vec<GameEvent>) {
        if self.invuln > 0.0 {
            return;
        }
        if self.shield > 0.0 {
            return;
        }
        self.health = self.health.saturating_sub(amount);
        self.invuln = config.player.invuln_window;
        events.push(GameEvent::Hit);
    }

    /// Applies a collected pickup.
    pub fn apply_power_up(
        &mut self,
        kind: super::powerup::PowerUpKind,
        config: &Config,
        events: &mut Vec<GameEvent>,
    ) {
        use super::powerup::PowerUpKind;
        let tuning = &config.powerup;
        match kind {
            PowerUpKind::Health => {
                self.health = (self.health + 1).min(config.player.max_health);
            }
            PowerUpKind::Rapid => {
                // Refresh, never stack: re-derive from the base interval so a
                // second pickup extends the buff without compounding it.
                self.fire_interval = (config.player.fire_interval * tuning.rapid_multiplier)
                    .max(tuning.min_fire_interval);
                self.rapid_timer = tuning.rapid_duration;
            }
            PowerUpKind::Shield => {
                self.shield = tuning.shield_duration;
            }
        }
        events.push(GameEvent::Pickup(kind));
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}
