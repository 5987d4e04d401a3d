//! Gameplay configuration
//!
//! Every constant the simulation reads is injected through [`Config`] rather
//! than hardcoded, so tests can build small deterministic worlds. Defaults
//! reproduce the shipped balance. Validation is fail-fast: a zero pool
//! capacity or a non-positive speed is a construction error, never a silent
//! no-op during play.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("playfield dimensions must be positive (got {width}x{height})")]
    BadPlayfield { width: f32, height: f32 },
    #[error("{name} pool capacity must be non-zero")]
    EmptyPool { name: &'static str },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("chase exit radius {exit} must exceed chase enter radius {enter}")]
    InvertedHysteresis { enter: f32, exit: f32 },
    #[error("{name} range is empty ({low} >= {high})")]
    EmptyRange {
        name: &'static str,
        low: f32,
        high: f32,
    },
    #[error("{name} must be a probability in [0, 1] (got {value})")]
    BadProbability { name: &'static str, value: f32 },
}

/// Playfield geometry. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Vertical band above the bottom edge that enemies may not enter
    /// (reserved for the HUD).
    pub ui_reserve: f32,
    /// How far outside the playfield a projectile or power-up may drift
    /// before its slot is recycled.
    pub despawn_margin: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            ui_reserve: 50.0,
            despawn_margin: 40.0,
        }
    }
}

/// Player ship tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTuning {
    pub speed: f32,
    pub radius: f32,
    /// Base seconds between shots.
    pub fire_interval: f32,
    pub max_health: u32,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    /// How far above the ship center shots spawn.
    pub muzzle_offset: f32,
    /// Damage immunity window after a hit, in seconds.
    pub invuln_window: f32,
    /// Spawn height above the bottom edge.
    pub spawn_height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 260.0,
            radius: 12.0,
            fire_interval: 0.18,
            max_health: 5,
            projectile_speed: 520.0,
            projectile_radius: 3.0,
            muzzle_offset: 18.0,
            invuln_window: 1.0,
            spawn_height: 70.0,
        }
    }
}

/// Fixed capacities for each entity pool. Slots are preallocated once and
/// recycled; spawn requests beyond capacity are silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSizes {
    pub projectiles: usize,
    pub enemy_projectiles: usize,
    pub enemies: usize,
    pub particles: usize,
    pub powerups: usize,
}

impl Default for PoolSizes {
    fn default() -> Self {
        Self {
            projectiles: 80,
            enemy_projectiles: 60,
            enemies: 24,
            particles: 220,
            powerups: 8,
        }
    }
}

/// Enemy stats and AI thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTuning {
    pub radius: f32,
    pub patrol_speed: f32,
    pub patrol_health: u32,
    pub kamikaze_speed: f32,
    pub kamikaze_health: u32,
    /// Kamikazes always dive a bit faster than their nominal speed.
    pub kamikaze_boost: f32,
    pub turret_health: u32,
    /// Distance at which a patroller switches to CHASE.
    pub chase_enter: f32,
    /// Distance at which a chaser gives up. Must exceed `chase_enter`;
    /// the gap is the hysteresis band that prevents flip-flopping.
    pub chase_exit: f32,
    /// Arrival radius for waypoint advancement.
    pub waypoint_arrive: f32,
    /// Waypoints are scattered within +/- this box around the spawn point.
    pub waypoint_spread_x: f32,
    pub waypoint_spread_y: f32,
    /// Turrets only track a countdown while the player is inside this range.
    pub turret_range: f32,
    /// Countdown reset range between turret shots, seconds.
    pub turret_cooldown_min: f32,
    pub turret_cooldown_max: f32,
    /// Countdown assigned at spawn, seconds.
    pub first_shot_min: f32,
    pub first_shot_max: f32,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            radius: 14.0,
            patrol_speed: 90.0,
            patrol_health: 2,
            kamikaze_speed: 180.0,
            kamikaze_health: 1,
            kamikaze_boost: 1.05,
            turret_health: 3,
            chase_enter: 220.0,
            chase_exit: 260.0,
            waypoint_arrive: 8.0,
            waypoint_spread_x: 120.0,
            waypoint_spread_y: 60.0,
            turret_range: 380.0,
            turret_cooldown_min: 0.8,
            turret_cooldown_max: 1.6,
            first_shot_min: 0.4,
            first_shot_max: 1.4,
            projectile_speed: 260.0,
            projectile_radius: 3.0,
        }
    }
}

/// Spawn director cadence and difficulty ramp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTuning {
    /// Countdown reset baseline, seconds.
    pub base_interval: f32,
    /// The reset interval shrinks by `elapsed * ramp_rate`, capped at
    /// `ramp_max`, and is clamped into [`min_interval`, `max_interval`].
    pub ramp_rate: f32,
    pub ramp_max: f32,
    pub min_interval: f32,
    pub max_interval: f32,
    /// Countdown at match start.
    pub initial_delay: f32,
    /// Countdown after a restart.
    pub restart_delay: f32,
    /// Enemies pre-spawned at match start.
    pub initial_enemies: usize,
    /// Vertical band near the top where enemies appear.
    pub band_top: f32,
    pub band_bottom: f32,
    /// Horizontal inset from the playfield edges.
    pub side_margin: f32,
    /// Kind weights: a uniform roll below `patrol_weight` spawns a patroller,
    /// below `patrol_weight + turret_weight` a turret, otherwise a kamikaze.
    pub patrol_weight: f32,
    pub turret_weight: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            base_interval: 2.0,
            ramp_rate: 0.02,
            ramp_max: 1.2,
            min_interval: 0.6,
            max_interval: 3.0,
            initial_delay: 0.6,
            restart_delay: 1.2,
            initial_enemies: 3,
            band_top: 30.0,
            band_bottom: 160.0,
            side_margin: 40.0,
            patrol_weight: 0.5,
            turret_weight: 0.3,
        }
    }
}

/// Power-up drops and effect strengths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpTuning {
    /// Chance that a destroyed enemy drops anything.
    pub drop_chance: f32,
    /// Kind weights, same threshold scheme as spawn weights; the remainder
    /// after health + rapid is the shield weight.
    pub health_weight: f32,
    pub rapid_weight: f32,
    pub fall_speed: f32,
    pub radius: f32,
    /// Timed shield duration granted by a shield pickup, seconds.
    pub shield_duration: f32,
    /// Fire-interval multiplier while the rapid buff is active.
    pub rapid_multiplier: f32,
    /// Seconds until the fire interval reverts to base.
    pub rapid_duration: f32,
    /// The fire interval never drops below this.
    pub min_fire_interval: f32,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            drop_chance: 0.35,
            health_weight: 0.5,
            rapid_weight: 0.35,
            fall_speed: 70.0,
            radius: 10.0,
            shield_duration: 6.0,
            rapid_multiplier: 0.7,
            rapid_duration: 8.0,
            min_fire_interval: 0.05,
        }
    }
}

/// Score awards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTuning {
    pub kamikaze_kill: u32,
    pub standard_kill: u32,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            kamikaze_kill: 150,
            standard_kill: 100,
        }
    }
}

/// Complete injected configuration, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield: Playfield,
    pub player: PlayerTuning,
    pub pools: PoolSizes,
    pub enemy: EnemyTuning,
    pub spawn: SpawnTuning,
    pub powerup: PowerUpTuning,
    pub score: ScoreTuning,
    /// Upper bound on a single tick's dt, bounding the physics effect of
    /// frame stalls.
    pub max_dt: f32,
}

impl Config {
    /// Rejects configurations that would degenerate into silent no-ops.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playfield.width <= 0.0 || self.playfield.height <= 0.0 {
            return Err(ConfigError::BadPlayfield {
                width: self.playfield.width,
                height: self.playfield.height,
            });
        }

        let pools = [
            ("projectiles", self.pools.projectiles),
            ("enemy_projectiles", self.pools.enemy_projectiles),
            ("enemies", self.pools.enemies),
            ("particles", self.pools.particles),
            ("powerups", self.pools.powerups),
        ];
        for (name, capacity) in pools {
            if capacity == 0 {
                return Err(ConfigError::EmptyPool { name });
            }
        }

        let positives = [
            ("player.speed", self.player.speed),
            ("player.fire_interval", self.player.fire_interval),
            ("player.projectile_speed", self.player.projectile_speed),
            ("player.max_health", self.player.max_health as f32),
            ("enemy.patrol_speed", self.enemy.patrol_speed),
            ("enemy.kamikaze_speed", self.enemy.kamikaze_speed),
            ("enemy.projectile_speed", self.enemy.projectile_speed),
            ("enemy.turret_cooldown_min", self.enemy.turret_cooldown_min),
            ("enemy.waypoint_spread_x", self.enemy.waypoint_spread_x),
            ("enemy.waypoint_spread_y", self.enemy.waypoint_spread_y),
            ("spawn.base_interval", self.spawn.base_interval),
            ("spawn.min_interval", self.spawn.min_interval),
            ("powerup.fall_speed", self.powerup.fall_speed),
            ("powerup.rapid_duration", self.powerup.rapid_duration),
            ("max_dt", self.max_dt),
        ];
        for (name, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.enemy.chase_exit <= self.enemy.chase_enter {
            return Err(ConfigError::InvertedHysteresis {
                enter: self.enemy.chase_enter,
                exit: self.enemy.chase_exit,
            });
        }

        // Parameter pairs sampled as half-open RNG ranges must stay non-empty,
        // otherwise the sampler panics mid-game.
        let ranges = [
            ("spawn band", self.spawn.band_top, self.spawn.band_bottom),
            (
                "spawn x band",
                self.spawn.side_margin,
                self.playfield.width - self.spawn.side_margin,
            ),
            (
                "turret cooldown",
                self.enemy.turret_cooldown_min,
                self.enemy.turret_cooldown_max,
            ),
            (
                "turret first shot",
                self.enemy.first_shot_min,
                self.enemy.first_shot_max,
            ),
        ];
        for (name, low, high) in ranges {
            if low >= high {
                return Err(ConfigError::EmptyRange { name, low, high });
            }
        }

        let probabilities = [
            ("powerup.drop_chance", self.powerup.drop_chance),
            ("powerup.health_weight", self.powerup.health_weight),
            ("powerup.rapid_weight", self.powerup.rapid_weight),
            ("spawn.patrol_weight", self.spawn.patrol_weight),
            ("spawn.turret_weight", self.spawn.turret_weight),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::BadProbability { name, value });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            player: PlayerTuning::default(),
            pools: PoolSizes::default(),
            enemy: EnemyTuning::default(),
            spawn: SpawnTuning::default(),
            powerup: PowerUpTuning::default(),
            score: ScoreTuning::default(),
            max_dt: 0.05,
        }
    }
}
