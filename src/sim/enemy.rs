//! Enemies and their AI
//!
//! Three kinds share one pooled type; the kind-specific state lives in a
//! tagged [`Brain`] so there is no open-ended dispatch.
//!
//! - Patrollers wander a 3-waypoint loop and switch to CHASE inside 220
//!   units of the player. They only give up past 260 units; the 40-unit gap
//!   is a hysteresis band so the FSM cannot oscillate at the boundary.
//! - Kamikazes dive straight at the player, always 5% over their nominal
//!   speed.
//! - Turrets never move. While the player is in range they run a countdown
//!   and fire a predictive shot on expiry.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::pool::{EntityPool, PoolSlot};
use super::projectile::{Owner, Projectile};
use super::state::GameEvent;
use crate::config::{EnemyTuning, Playfield};

/// Enemy kind, immutable for the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Patrol,
    Kamikaze,
    Turret,
}

/// Kind tag plus the per-kind AI state.
#[derive(Debug, Clone)]
pub enum Brain {
    Patrol {
        /// Generated once at spawn, immutable afterwards.
        waypoints: [Vec2; 3],
        index: usize,
        chasing: bool,
    },
    Kamikaze,
    Turret {
        /// Seconds until the next shot while the player is in range.
        countdown: f32,
    },
}

impl Default for Brain {
    fn default() -> Self {
        Brain::Kamikaze
    }
}

#[derive(Debug, Clone, Default)]
pub struct Enemy {
    pub active: bool,
    pub pos: Vec2,
    pub radius: f32,
    pub health: u32,
    pub speed: f32,
    pub brain: Brain,
}

impl Enemy {
    pub fn kind(&self) -> EnemyKind {
        match self.brain {
            Brain::Patrol { .. } => EnemyKind::Patrol,
            Brain::Kamikaze => EnemyKind::Kamikaze,
            Brain::Turret { .. } => EnemyKind::Turret,
        }
    }

    /// Initializes a recycled slot with kind-dependent stats. Patrol
    /// waypoints are scattered in a box around the spawn point, clamped to
    /// the upper half of the playfield.
    pub fn activate(
        &mut self,
        pos: Vec2,
        kind: EnemyKind,
        tuning: &EnemyTuning,
        field: &Playfield,
        rng: &mut Pcg32,
    ) {
        self.pos = pos;
        self.radius = tuning.radius;
        match kind {
            EnemyKind::Patrol => {
                self.health = tuning.patrol_health;
                self.speed = tuning.patrol_speed;
                let mut waypoints = [Vec2::ZERO; 3];
                for point in &mut waypoints {
                    let x = pos.x + rng.random_range(-tuning.waypoint_spread_x..tuning.waypoint_spread_x);
                    let y = pos.y + rng.random_range(-tuning.waypoint_spread_y..tuning.waypoint_spread_y);
                    *point = Vec2::new(
                        x.clamp(20.0, field.width - 20.0),
                        y.clamp(20.0, field.height / 2.0),
                    );
                }
                self.brain = Brain::Patrol {
                    waypoints,
                    index: 0,
                    chasing: false,
                };
            }
            EnemyKind::Kamikaze => {
                self.health = tuning.kamikaze_health;
                self.speed = tuning.kamikaze_speed;
                self.brain = Brain::Kamikaze;
            }
            EnemyKind::Turret => {
                self.health = tuning.turret_health;
                self.speed = 0.0;
                self.brain = Brain::Turret {
                    countdown: rng.random_range(tuning.first_shot_min..tuning.first_shot_max),
                };
            }
        }
        self.active = true;
    }

    /// Advances the AI one tick, then clamps back into the playfield with
    /// the bottom UI band excluded.
    pub fn update(
        &mut self,
        dt: f32,
        player_pos: Vec2,
        tuning: &EnemyTuning,
        field: &Playfield,
        enemy_projectiles: &mut EntityPool<Projectile>,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
    ) {
        let player_dist = self.pos.distance(player_pos);
        let speed = self.speed;
        let mut fire = false;

        match &mut self.brain {
            Brain::Patrol {
                waypoints,
                index,
                chasing,
            } => {
                if player_dist < tuning.chase_enter {
                    *chasing = true;
                }
                if *chasing {
                    let step = step_toward(self.pos, player_pos, speed * dt);
                    self.pos += step;
                    if player_dist > tuning.chase_exit {
                        *chasing = false;
                    }
                } else {
                    let target = waypoints[*index];
                    let step = step_toward(self.pos, target, speed * dt);
                    self.pos += step;
                    if self.pos.distance(target) < tuning.waypoint_arrive {
                        *index = (*index + 1) % waypoints.len();
                    }
                }
            }
            Brain::Kamikaze => {
                let step = step_toward(self.pos, player_pos, speed * tuning.kamikaze_boost * dt);
                self.pos += step;
            }
            Brain::Turret { countdown } => {
                if player_dist < tuning.turret_range {
                    *countdown -= dt;
                    if *countdown <= 0.0 {
                        fire = true;
                        *countdown =
                            rng.random_range(tuning.turret_cooldown_min..tuning.turret_cooldown_max);
                    }
                }
            }
        }

        if fire {
            self.shoot_predictive(player_pos, tuning, enemy_projectiles, events);
        }

        self.pos = self.pos.clamp(
            Vec2::splat(self.radius),
            Vec2::new(
                field.width - self.radius,
                field.height - self.radius - field.ui_reserve,
            ),
        );
    }

    /// Fires one enemy projectile with predictive aim.
    ///
    /// The player's velocity estimate is pinned to zero, which collapses the
    /// lead to present-position aiming, but the time-to-impact plumbing is
    /// kept so a real estimate can be dropped in later.
    pub fn shoot_predictive(
        &self,
        player_pos: Vec2,
        tuning: &EnemyTuning,
        enemy_projectiles: &mut EntityPool<Projectile>,
        events: &mut Vec<GameEvent>,
    ) {
        let Some(slot) = enemy_projectiles.spawn() else {
            return;
        };
        let assumed_player_vel = Vec2::ZERO;
        let dist = self.pos.distance(player_pos).max(f32::EPSILON);
        let lead_time = dist / tuning.projectile_speed;
        let aim = player_pos + assumed_player_vel * lead_time;
        let dir = (aim - self.pos).normalize_or_zero();
        slot.activate(
            self.pos,
            dir * tuning.projectile_speed,
            tuning.projectile_radius,
            Owner::Enemy,
        );
        events.push(GameEvent::EnemyShoot);
    }

    /// One hit per collision. The resolver deactivates and reports the kill
    /// once health reaches zero.
    pub fn apply_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Displacement of at most `max_step` toward `target`.
fn step_toward(from: Vec2, target: Vec2, max_step: f32) -> Vec2 {
    (target - from).normalize_or_zero() * max_step
}

impl PoolSlot for Enemy {
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
    use crate::config::Config;
    use rand::SeedableRng;

    fn fixture() -> (Config, Pcg32, EntityPool<Projectile>, Vec<GameEvent>) {
        (
            Config::default(),
            Pcg32::seed_from_u64(9),
            EntityPool::new(60),
            Vec::new(),
        )
    }

    fn spawn(kind: EnemyKind, pos: Vec2, config: &Config, rng: &mut Pcg32) -> Enemy {
        let mut enemy = Enemy::default();
        enemy.activate(pos, kind, &config.enemy, &config.playfield, rng);
        enemy
    }

    fn chasing(enemy: &Enemy) -> bool {
        matches!(enemy.brain, Brain::Patrol { chasing: true, .. })
    }

    #[test]
    fn test_patrol_hysteresis_band() {
        let (config, mut rng, mut shots, mut events) = fixture();
        let mut enemy = spawn(EnemyKind::Patrol, Vec2::new(100.0, 100.0), &config, &mut rng);
        let tick = |enemy: &mut Enemy, player: Vec2, shots: &mut _, rng: &mut _, events: &mut _| {
            enemy.update(1e-6, player, &config.enemy, &config.playfield, shots, rng, events);
        };

        // Inside the enter radius: chase begins the same tick.
        tick(&mut enemy, Vec2::new(100.0 + 210.0, 100.0), &mut shots, &mut rng, &mut events);
        assert!(chasing(&enemy));

        // 230 sits inside the hysteresis band: still chasing.
        tick(&mut enemy, Vec2::new(100.0 + 230.0, 100.0), &mut shots, &mut rng, &mut events);
        assert!(chasing(&enemy));

        // Past the exit radius: back to patrol.
        tick(&mut enemy, Vec2::new(100.0 + 270.0, 100.0), &mut shots, &mut rng, &mut events);
        assert!(!chasing(&enemy));

        // Re-entering the band from outside must NOT restart the chase.
        tick(&mut enemy, Vec2::new(100.0 + 230.0, 100.0), &mut shots, &mut rng, &mut events);
        assert!(!chasing(&enemy));
    }

    #[test]
    fn test_patrol_waypoints_clamped_to_upper_half() {
        let (config, mut rng, ..) = fixture();
        for _ in 0..50 {
            let enemy = spawn(EnemyKind::Patrol, Vec2::new(30.0, 230.0), &config, &mut rng);
            let Brain::Patrol { waypoints, .. } = &enemy.brain else {
                panic!("patrol brain expected");
            };
            for point in waypoints {
                assert!(point.x >= 20.0 && point.x <= config.playfield.width - 20.0);
                assert!(point.y >= 20.0 && point.y <= config.playfield.height / 2.0);
            }
        }
    }

    #[test]
    fn test_patrol_advances_waypoints_cyclically() {
        let (config, mut rng, mut shots, mut events) = fixture();
        let mut enemy = spawn(EnemyKind::Patrol, Vec2::new(320.0, 120.0), &config, &mut rng);
        let far_player = Vec2::new(620.0, 470.0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            enemy.update(
                0.05,
                far_player,
                &config.enemy,
                &config.playfield,
                &mut shots,
                &mut rng,
                &mut events,
            );
            if let Brain::Patrol { index, .. } = enemy.brain {
                seen.insert(index);
            }
        }
        assert_eq!(seen.len(), 3, "all three waypoints visited");
    }

    #[test]
    fn test_kamikaze_dives_with_boost() {
        let (config, mut rng, mut shots, mut events) = fixture();
        let mut enemy = spawn(EnemyKind::Kamikaze, Vec2::new(100.0, 100.0), &config, &mut rng);
        let player = Vec2::new(400.0, 300.0);
        let before = enemy.pos;
        enemy.update(
            0.1,
            player,
            &config.enemy,
            &config.playfield,
            &mut shots,
            &mut rng,
            &mut events,
        );
        let step = enemy.pos - before;
        let expected = config.enemy.kamikaze_speed * config.enemy.kamikaze_boost * 0.1;
        assert!((step.length() - expected).abs() < 1e-3);
        assert!(step.normalize().dot((player - before).normalize()) > 0.999);
    }

    #[test]
    fn test_turret_fires_at_player_below() {
        let (config, mut rng, mut shots, mut events) = fixture();
        let mut enemy = spawn(EnemyKind::Turret, Vec2::new(100.0, 100.0), &config, &mut rng);
        let player = Vec2::new(100.0, 470.0);

        // Run until the first countdown (at most 1.4s) elapses.
        for _ in 0..40 {
            enemy.update(
                0.05,
                player,
                &config.enemy,
                &config.playfield,
                &mut shots,
                &mut rng,
                &mut events,
            );
            if shots.active_count() > 0 {
                break;
            }
        }

        assert_eq!(shots.active_count(), 1, "exactly one shot after the countdown");
        let shot = shots.iter_active().next().expect("projectile");
        assert_eq!(shot.owner, Owner::Enemy);
        let dir = shot.vel.normalize();
        assert!(dir.x.abs() < 1e-3);
        assert!((dir.y - 1.0).abs() < 1e-3, "aimed straight down at the player");
        assert!(enemy.pos == Vec2::new(100.0, 100.0), "turrets never move");
    }

    #[test]
    fn test_turret_holds_fire_out_of_range() {
        let (config, mut rng, mut shots, mut events) = fixture();
        let mut enemy = spawn(EnemyKind::Turret, Vec2::new(100.0, 100.0), &config, &mut rng);
        let far_player = Vec2::new(100.0, 100.0 + config.enemy.turret_range + 1.0);
        for _ in 0..100 {
            enemy.update(
                0.05,
                far_player,
                &config.enemy,
                &config.playfield,
                &mut shots,
                &mut rng,
                &mut events,
            );
        }
        assert_eq!(shots.active_count(), 0);
    }

    #[test]
    fn test_enemy_respects_ui_reserve() {
        let (config, mut rng, mut shots, mut events) = fixture();
        let mut enemy = spawn(EnemyKind::Kamikaze, Vec2::new(320.0, 300.0), &config, &mut rng);
        let player = Vec2::new(320.0, 470.0);
        for _ in 0..200 {
            enemy.update(
                0.05,
                player,
                &config.enemy,
                &config.playfield,
                &mut shots,
                &mut rng,
                &mut events,
            );
        }
        let floor = config.playfield.height - enemy.radius - config.playfield.ui_reserve;
        assert!(enemy.pos.y <= floor + 1e-3);
    }

    #[test]
    fn test_apply_hit_saturates_at_zero() {
        let (config, mut rng, ..) = fixture();
        let mut enemy = spawn(EnemyKind::Kamikaze, Vec2::new(100.0, 100.0), &config, &mut rng);
        enemy.apply_hit();
        assert!(enemy.is_dead());
        enemy.apply_hit();
        assert_eq!(enemy.health, 0);
    }
}
