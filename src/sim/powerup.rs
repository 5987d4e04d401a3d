//! Power-up pickups
//!
//! Dropped probabilistically when an enemy dies, fall straight down, and are
//! consumed on contact with the player.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::pool::PoolSlot;
use crate::config::{Playfield, PowerUpTuning};

/// What a pickup grants. The effect itself lives in `Player::apply_power_up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerUpKind {
    /// +1 health, clamped to max.
    #[default]
    Health,
    /// Temporarily shortened fire interval.
    Rapid,
    /// Timed damage shield.
    Shield,
}

impl PowerUpKind {
    /// Weighted pick: health, then rapid, shield takes the remainder.
    pub fn roll(rng: &mut Pcg32, tuning: &PowerUpTuning) -> Self {
        let roll: f32 = rng.random();
        if roll < tuning.health_weight {
            PowerUpKind::Health
        } else if roll < tuning.health_weight + tuning.rapid_weight {
            PowerUpKind::Rapid
        } else {
            PowerUpKind::Shield
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PowerUp {
    pub active: bool,
    pub pos: Vec2,
    pub fall_speed: f32,
    pub radius: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn activate(&mut self, pos: Vec2, kind: PowerUpKind, tuning: &PowerUpTuning) {
        self.pos = pos;
        self.fall_speed = tuning.fall_speed;
        self.radius = tuning.radius;
        self.kind = kind;
        self.active = true;
    }

    /// Falls straight down; the slot recycles once it leaves the bottom edge.
    pub fn update(&mut self, dt: f32, field: &Playfield) {
        self.pos.y += self.fall_speed * dt;
        if self.pos.y > field.height + field.despawn_margin {
            self.active = false;
        }
    }
}

impl PoolSlot for PowerUp {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}
