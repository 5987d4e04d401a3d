//! Spawn director
//!
//! A countdown timer drives enemy spawning. Every reset tightens the cadence
//! with elapsed match time, so pressure ramps up monotonically until the
//! floor interval is reached.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::enemy::{Enemy, EnemyKind};
use super::pool::EntityPool;
use crate::config::{Config, SpawnTuning};

#[derive(Debug, Clone)]
pub struct SpawnDirector {
    timer: f32,
}

impl SpawnDirector {
    pub fn new(initial_delay: f32) -> Self {
        Self { timer: initial_delay }
    }

    /// Restarts the countdown, e.g. after a match reset.
    pub fn reset(&mut self, delay: f32) {
        self.timer = delay;
    }

    /// The post-reset countdown for a given elapsed match time:
    /// `clamp(base - min(ramp_max, elapsed * ramp_rate), min, max)`.
    /// Non-increasing in `elapsed` for a fixed configuration.
    pub fn next_interval(elapsed: f32, tuning: &SpawnTuning) -> f32 {
        (tuning.base_interval - (elapsed * tuning.ramp_rate).min(tuning.ramp_max))
            .clamp(tuning.min_interval, tuning.max_interval)
    }

    /// Decrements the countdown; on expiry requests one spawn and re-arms.
    pub fn tick(
        &mut self,
        dt: f32,
        elapsed: f32,
        enemies: &mut EntityPool<Enemy>,
        config: &Config,
        rng: &mut Pcg32,
    ) {
        self.timer -= dt;
        if self.timer <= 0.0 {
            spawn_enemy(enemies, config, rng);
            self.timer = Self::next_interval(elapsed, &config.spawn);
        }
    }
}

/// Spawns one enemy at a random spot in the top band, kind chosen by the
/// configured weights. Silently dropped when the pool is saturated.
pub fn spawn_enemy(enemies: &mut EntityPool<Enemy>, config: &Config, rng: &mut Pcg32) {
    let Some(slot) = enemies.spawn() else {
        return;
    };
    let tuning = &config.spawn;
    let pos = Vec2::new(
        rng.random_range(tuning.side_margin..config.playfield.width - tuning.side_margin),
        rng.random_range(tuning.band_top..tuning.band_bottom),
    );
    let roll: f32 = rng.random();
    let kind = if roll < tuning.patrol_weight {
        EnemyKind::Patrol
    } else if roll < tuning.patrol_weight + tuning.turret_weight {
        EnemyKind::Turret
    } else {
        EnemyKind::Kamikaze
    };
    slot.activate(pos, kind, &config.enemy, &config.playfield, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_interval_tightens_with_elapsed_time() {
        let tuning = SpawnTuning::default();
        assert_eq!(SpawnDirector::next_interval(0.0, &tuning), 2.0);
        // 30s in: 2.0 - 0.6
        assert!((SpawnDirector::next_interval(30.0, &tuning) - 1.4).abs() < 1e-6);
        // Ramp caps at 1.2, then the floor clamp takes over.
        assert!((SpawnDirector::next_interval(600.0, &tuning) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_on_expiry_and_rearm() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut enemies = EntityPool::new(config.pools.enemies);
        let mut director = SpawnDirector::new(0.1);

        director.tick(0.05, 0.0, &mut enemies, &config, &mut rng);
        assert_eq!(enemies.active_count(), 0);
        director.tick(0.06, 0.0, &mut enemies, &config, &mut rng);
        assert_eq!(enemies.active_count(), 1);
        assert!((director.timer - config.spawn.base_interval).abs() < 1e-6);
    }

    #[test]
    fn test_all_kinds_spawn_with_expected_ranking() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut counts = [0usize; 3];
        for _ in 0..600 {
            let mut enemies = EntityPool::new(1);
            spawn_enemy(&mut enemies, &config, &mut rng);
            let enemy = enemies.iter_active().next().expect("spawned");
            match enemy.kind() {
                EnemyKind::Patrol => counts[0] += 1,
                EnemyKind::Turret => counts[1] += 1,
                EnemyKind::Kamikaze => counts[2] += 1,
            }
            let tuning = &config.spawn;
            assert!(enemy.pos.x >= tuning.side_margin);
            assert!(enemy.pos.x <= config.playfield.width - tuning.side_margin);
            assert!(enemy.pos.y >= tuning.band_top && enemy.pos.y <= tuning.band_bottom);
        }
        // 50/30/20 weights should rank the counts.
        assert!(counts[0] > counts[1] && counts[1] > counts[2]);
    }

    #[test]
    fn test_saturated_enemy_pool_drops_spawn() {
        let mut config = Config::default();
        config.pools.enemies = 1;
        let mut rng = Pcg32::seed_from_u64(5);
        let mut enemies = EntityPool::new(1);
        spawn_enemy(&mut enemies, &config, &mut rng);
        spawn_enemy(&mut enemies, &config, &mut rng);
        assert_eq!(enemies.active_count(), 1);
    }

    proptest! {
        /// Post-reset countdown always lies in [min, max(base, min)] and is
        /// non-increasing in elapsed time.
        #[test]
        fn prop_interval_bounded_and_monotone(e1 in 0.0f32..10_000.0, e2 in 0.0f32..10_000.0) {
            let tuning = SpawnTuning::default();
            let (lo, hi) = (e1.min(e2), e1.max(e2));
            let early = SpawnDirector::next_interval(lo, &tuning);
            let late = SpawnDirector::next_interval(hi, &tuning);
            prop_assert!(late <= early);
            for interval in [early, late] {
                prop_assert!(interval >= tuning.min_interval);
                prop_assert!(interval <= tuning.base_interval.max(tuning.min_interval));
            }
        }
    }
}
