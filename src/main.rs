//! Void Strike entry point
//!
//! Headless demo run: advances the simulation with a scripted pilot and logs
//! the events a real frontend would turn into audio and visuals. Useful for
//! profiling, soak-testing determinism, and eyeballing the difficulty ramp.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use void_strike::config::Config;
use void_strike::highscores::HighScore;
use void_strike::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

const HIGH_SCORE_PATH: &str = "highscore.json";
const SIM_DT: f32 = 1.0 / 60.0;
const MAX_TICKS: u32 = 60 * 120;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let record = HighScore::load(Path::new(HIGH_SCORE_PATH));
    let mut state = match GameState::new(Config::default(), seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("bad configuration: {err}");
            std::process::exit(1);
        }
    };
    state.high_score = record.score;

    // Scripted pilot: hold fire and weave side to side.
    let mut ticks = 0u32;
    while state.phase != GamePhase::GameOver && ticks < MAX_TICKS {
        let input = TickInput {
            move_dir: Vec2::new(if (ticks / 45) % 2 == 0 { 1.0 } else { -1.0 }, 0.0),
            fire: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::Explosion { pos } => {
                    log::debug!("explosion at ({:.0}, {:.0})", pos.x, pos.y)
                }
                GameEvent::Hit => log::info!("hit, {} health left", state.player.health),
                GameEvent::Pickup(kind) => log::info!("picked up {kind:?}"),
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    if new_high_score {
                        HighScore { score }.save(Path::new(HIGH_SCORE_PATH));
                    }
                }
                GameEvent::Shoot | GameEvent::EnemyShoot => {}
            }
        }
        ticks += 1;
    }

    println!(
        "seed {seed}: survived {:.1}s, score {} (best {})",
        state.elapsed, state.player.score, state.high_score
    );
}
