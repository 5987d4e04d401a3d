//! Visual effect particles
//!
//! Explosion debris, shockwaves, and engine/muzzle trails. These are output
//! only: the renderer reads them, gameplay rules never do. They share the
//! pool backpressure policy, so a busy screen simply stops emitting extras.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::pool::{EntityPool, PoolSlot};

/// Draw-dispatch tag for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleKind {
    /// Explosion debris, warm colors.
    #[default]
    Ember,
    /// Single expanding ring spawned with each explosion.
    Shockwave,
    /// Engine exhaust and muzzle wisps.
    Trail,
}

#[derive(Debug, Clone, Default)]
pub struct Particle {
    pub active: bool,
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub life: f32,
    pub size: f32,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn activate(&mut self, pos: Vec2, vel: Vec2, life: f32, size: f32, kind: ParticleKind) {
        self.pos = pos;
        self.vel = vel;
        self.age = 0.0;
        self.life = life;
        self.size = size;
        self.kind = kind;
        self.active = true;
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
        if self.age >= self.life {
            self.active = false;
        }
    }

    /// Remaining life fraction in [0, 1], for fade-out rendering.
    pub fn fade(&self) -> f32 {
        (1.0 - self.age / self.life).max(0.0)
    }
}

impl PoolSlot for Particle {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Bursts explosion debris plus one shockwave ring at `pos`.
pub fn spawn_explosion(pool: &mut EntityPool<Particle>, rng: &mut Pcg32, pos: Vec2, count: usize) {
    for _ in 0..count {
        let Some(slot) = pool.spawn() else { break };
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(80.0..300.0);
        let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        let life = rng.random_range(0.5..1.0);
        let size = rng.random_range(3.0..6.0);
        slot.activate(pos, vel, life, size, ParticleKind::Ember);
    }
    if let Some(slot) = pool.spawn() {
        slot.activate(pos, Vec2::ZERO, 0.6, 20.0, ParticleKind::Shockwave);
    }
}

/// Emits a small downward exhaust wisp, scaled up for muzzle flashes.
pub fn spawn_trail(pool: &mut EntityPool<Particle>, rng: &mut Pcg32, pos: Vec2, scale: f32) {
    let count = (2.0 + scale * 2.0).round() as usize;
    for _ in 0..count {
        let Some(slot) = pool.spawn() else { break };
        let angle = std::f32::consts::FRAC_PI_2 + rng.random_range(-0.6..0.6);
        let speed = rng.random_range(40.0..120.0) * scale;
        let jitter = Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(-2.0..2.0));
        let life = rng.random_range(0.22..0.35);
        slot.activate(
            pos + jitter,
            Vec2::new(angle.cos(), angle.sin()) * speed,
            life,
            2.0 + scale * 1.2,
            ParticleKind::Trail,
        );
    }
}
