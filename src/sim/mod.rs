//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by pool slot index)
//! - Fixed entity capacities, no mid-game allocation
//! - No rendering, audio, or platform dependencies
//!
//! Identical config, seed, and per-tick inputs replay an identical match.

pub mod collision;
pub mod enemy;
pub mod particle;
pub mod player;
pub mod pool;
pub mod powerup;
pub mod projectile;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use enemy::{Brain, Enemy, EnemyKind};
pub use particle::{Particle, ParticleKind};
pub use player::Player;
pub use pool::{EntityPool, PoolSlot};
pub use powerup::{PowerUp, PowerUpKind};
pub use projectile::{Owner, Projectile};
pub use spawn::SpawnDirector;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
