//! Game state and per-match bookkeeping
//!
//! All mutable simulation state lives here as one logical unit: the player
//! singleton, the five entity pools, the spawn director, the seeded RNG, and
//! the per-tick event buffer. One `tick` call owns everything; there is no
//! locking and no parallelism.
//!
//! Renderers read the pools directly. The suggested back-to-front draw order
//! is particles, enemies, enemy projectiles, player, player projectiles,
//! power-ups.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::particle::Particle;
use super::player::Player;
use super::pool::EntityPool;
use super::powerup::{PowerUp, PowerUpKind};
use super::projectile::Projectile;
use super::spawn::{self, SpawnDirector};
use crate::config::{Config, ConfigError};

/// Current phase of gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, entities untouched
    Paused,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Fire-and-forget notifications drained by the embedder after each tick.
/// Audio cues map one-to-one; the core never waits on their handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player fired a shot
    Shoot,
    /// A turret fired at the player
    EnemyShoot,
    /// An enemy died or rammed the player
    Explosion { pos: Vec2 },
    /// The player took a point of damage
    Hit,
    /// The player collected a pickup
    Pickup(PowerUpKind),
    /// The run ended
    GameOver { score: u32, new_high_score: bool },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Simulated seconds since match start; drives the difficulty ramp.
    pub elapsed: f32,
    pub player: Player,
    pub projectiles: EntityPool<Projectile>,
    pub enemy_projectiles: EntityPool<Projectile>,
    pub enemies: EntityPool<Enemy>,
    pub powerups: EntityPool<PowerUp>,
    pub particles: EntityPool<Particle>,
    pub spawner: SpawnDirector,
    /// Best score on record, injected at startup from external persistence.
    pub high_score: u32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Builds a fresh match. Fails fast on invalid configuration; a zero
    /// capacity or negative speed must never surface as a mid-game no-op.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self {
            player: Player::new(&config),
            projectiles: EntityPool::new(config.pools.projectiles),
            enemy_projectiles: EntityPool::new(config.pools.enemy_projectiles),
            enemies: EntityPool::new(config.pools.enemies),
            powerups: EntityPool::new(config.pools.powerups),
            particles: EntityPool::new(config.pools.particles),
            spawner: SpawnDirector::new(config.spawn.initial_delay),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Playing,
            elapsed: 0.0,
            high_score: 0,
            events: Vec::new(),
            config,
        };

        // Opening wave, so the playfield is not empty while the director
        // counts down.
        let Self {
            config,
            rng,
            enemies,
            ..
        } = &mut state;
        for _ in 0..config.spawn.initial_enemies {
            spawn::spawn_enemy(enemies, config, rng);
        }

        log::info!("new match, seed {seed}");
        Ok(state)
    }

    /// Resets the match: player back to spawn, every pooled entity recycled,
    /// clock and spawn countdown rewound, pending deferred effects (the
    /// rapid-fire reversion) cancelled. The high score survives.
    pub fn restart(&mut self) {
        self.player.reset(&self.config);
        self.projectiles.deactivate_all();
        self.enemy_projectiles.deactivate_all();
        self.enemies.deactivate_all();
        self.powerups.deactivate_all();
        self.particles.deactivate_all();
        self.elapsed = 0.0;
        self.spawner.reset(self.config.spawn.restart_delay);
        self.phase = GamePhase::Playing;
        self.events.clear();
        log::info!("match restarted");
    }

    /// Ends the run. Called at most once per life: the phase transition out
    /// of `Playing` is the guard. The embedder persists the high score when
    /// the event says it improved.
    pub(crate) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let score = self.player.score;
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
        }
        self.events.push(GameEvent::GameOver {
            score,
            new_high_score,
        });
        log::info!("game over, score {score} (best {})", self.high_score);
    }

    /// Hands the tick's events to the embedder and clears the buffer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
