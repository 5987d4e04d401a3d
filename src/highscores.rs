//! Best-score record
//!
//! A single persisted score, read at startup and rewritten whenever a run
//! improves on it. Persistence failures are logged, never fatal: a missing
//! or corrupt file just means the record starts at zero.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
}

impl HighScore {
    /// Reads the record from `path`. Any failure falls back to zero.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(record) => {
                    log::info!("loaded high score from {}", path.display());
                    record
                }
                Err(err) => {
                    log::warn!("corrupt high score file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::info!("no high score at {} ({err}), starting fresh", path.display());
                Self::default()
            }
        }
    }

    /// Writes the record to `path`. Failures are logged and swallowed.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save high score to {}: {err}", path.display());
                } else {
                    log::info!("high score {} saved", self.score);
                }
            }
            Err(err) => log::warn!("failed to encode high score: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_disk() {
        let path = std::env::temp_dir().join("void_strike_highscore_test.json");
        let record = HighScore { score: 4321 };
        record.save(&path);
        assert_eq!(HighScore::load(&path), record);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_starts_fresh() {
        let path = std::env::temp_dir().join("void_strike_highscore_missing.json");
        let _ = fs::remove_file(&path);
        assert_eq!(HighScore::load(&path), HighScore::default());
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = std::env::temp_dir().join("void_strike_highscore_corrupt.json");
        fs::write(&path, "not json").expect("write fixture");
        assert_eq!(HighScore::load(&path), HighScore::default());
        let _ = fs::remove_file(&path);
    }
}
