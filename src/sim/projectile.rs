//! Projectiles
//!
//! Simple kinematic entities with an owner tag. Player shots and enemy shots
//! live in separate pools but share this type; the tag drives both render
//! dispatch and which collision rule touches them.

use glam::Vec2;

use super::pool::PoolSlot;
use crate::config::Playfield;

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Owner {
    #[default]
    Player,
    Enemy,
}

#[derive(Debug, Clone, Default)]
pub struct Projectile {
    pub active: bool,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub owner: Owner,
}

impl Projectile {
    /// Initializes a recycled slot. The caller is a pool's `spawn`.
    pub fn activate(&mut self, pos: Vec2, vel: Vec2, radius: f32, owner: Owner) {
        self.pos = pos;
        self.vel = vel;
        self.radius = radius;
        self.owner = owner;
        self.active = true;
    }

    /// Integrates one tick; slots are recycled once the projectile drifts
    /// past the despawn margin outside the playfield.
    pub fn update(&mut self, dt: f32, field: &Playfield) {
        self.pos += self.vel * dt;
        let margin = field.despawn_margin;
        if self.pos.x < -margin
            || self.pos.x > field.width + margin
            || self.pos.y < -margin
            || self.pos.y > field.height + margin
        {
            self.active = false;
        }
    }
}

impl PoolSlot for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_despawns_past_top_margin() {
        let field = Playfield::default();
        let mut shot = Projectile::default();
        shot.activate(Vec2::new(320.0, 5.0), Vec2::new(0.0, -520.0), 3.0, Owner::Player);

        shot.update(0.05, &field);
        assert!(shot.active, "still inside the margin band");
        shot.update(0.05, &field);
        assert!(!shot.active, "past the despawn margin");
    }

    #[test]
    fn test_projectile_travels_straight() {
        let field = Playfield::default();
        let mut shot = Projectile::default();
        shot.activate(Vec2::new(100.0, 100.0), Vec2::new(260.0, 0.0), 3.0, Owner::Enemy);

        shot.update(0.5, &field);
        assert_eq!(shot.pos, Vec2::new(230.0, 100.0));
        assert!(shot.active);
    }
}
