//! Runner configuration read from the environment.
//!
//! - `TETRIS_SEED`: piece generator seed (default: derived from the clock)
//! - `TETRIS_HIGHSCORE_PATH`: high-score file (default: `tetris_highscore.json`)
//! - `TETRIS_HIGHSCORE_DISABLED`: `1`/`true` turns persistence off
//! - `TETRIS_BELL`: `0`/`false` silences the bell cues
//! - `TETRIS_LOG_PATH`: write logs to this file instead of stderr
//!
//! Unparsable values fall back to the default.

use std::path::PathBuf;

use crate::storage::HighScoreStore;

pub const DEFAULT_HIGHSCORE_PATH: &str = "tetris_highscore.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// `None` means seed from the clock at startup.
    pub seed: Option<u32>,
    pub highscore_path: PathBuf,
    pub highscore_enabled: bool,
    pub bell: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            highscore_enabled: true,
            bell: true,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = value("TETRIS_SEED").and_then(|s| s.parse().ok());

        let highscore_path = value("TETRIS_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.highscore_path);

        let highscore_enabled = !value("TETRIS_HIGHSCORE_DISABLED")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(false);

        let bell = value("TETRIS_BELL")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.bell);

        let log_path = value("TETRIS_LOG_PATH").map(PathBuf::from);

        Self {
            seed,
            highscore_path,
            highscore_enabled,
            bell,
            log_path,
        }
    }

    pub fn highscore_store(&self) -> HighScoreStore {
        if self.highscore_enabled {
            HighScoreStore::new(&self.highscore_path)
        } else {
            HighScoreStore::disabled()
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config, GameConfig::default());
        assert_eq!(
            config.highscore_store().path(),
            Some(PathBuf::from(DEFAULT_HIGHSCORE_PATH).as_path())
        );
    }

    #[test]
    fn test_all_values() {
        let config = config_with(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_HIGHSCORE_PATH", "/tmp/scores.json"),
            ("TETRIS_HIGHSCORE_DISABLED", "true"),
            ("TETRIS_BELL", "0"),
            ("TETRIS_LOG_PATH", " /tmp/tetris.log "),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.highscore_path, PathBuf::from("/tmp/scores.json"));
        assert!(!config.highscore_enabled);
        assert!(!config.bell);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/tetris.log")));
        assert_eq!(config.highscore_store().path(), None);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = config_with(&[
            ("TETRIS_SEED", "-3"),
            ("TETRIS_HIGHSCORE_DISABLED", "maybe"),
            ("TETRIS_BELL", "loud"),
            ("TETRIS_LOG_PATH", "   "),
        ]);
        assert_eq!(config.seed, None);
        assert!(config.highscore_enabled);
        assert!(config.bell);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
