//! Void Strike - a fixed-pool 2D arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, enemy AI, collisions, game state)
//! - `config`: Injected gameplay configuration with fail-fast validation
//! - `highscores`: Best-score record, read at startup and written on improvement
//!
//! Rendering, audio, raw input, and storage live outside this crate. They
//! talk to the core through narrow seams: a [`sim::TickInput`] snapshot per
//! frame, read-only iteration over the active entities in each pool, and the
//! [`sim::GameEvent`] buffer drained after every tick.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{Config, ConfigError};
pub use highscores::HighScore;
