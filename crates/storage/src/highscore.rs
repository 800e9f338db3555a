//! High-score file store with atomic replace-on-write.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Millis;

/// On-disk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreRecord {
    pub high_score: u32,
    pub updated_at: Millis,
}

impl HighScoreRecord {
    /// Lenient parse: anything that isn't a usable number becomes 0.
    fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("high score file is not valid JSON")?;

        let high_score = value
            .get("highScore")
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.floor().min(u32::MAX as f64) as u32)
            .unwrap_or(0);
        let updated_at = value.get("updatedAt").and_then(Value::as_u64).unwrap_or(0);

        Ok(Self {
            high_score,
            updated_at,
        })
    }
}

/// High-score file handle.
///
/// Cheap to clone; holds only the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store that never reads or writes anything.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored high score, or 0 if there is none or it can't be read.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(record) => record.map(|r| r.high_score).unwrap_or(0),
            Err(e) => {
                log::warn!("[HighScore] load failed, using 0: {:#}", e);
                0
            }
        }
    }

    /// Read the stored record. A missing or empty file is `Ok(None)`.
    pub fn try_load(&self) -> Result<Option<HighScoreRecord>> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        HighScoreRecord::from_json(&raw)
            .with_context(|| format!("parsing {}", path.display()))
            .map(Some)
    }

    /// Persist `score`. Failures are logged, never returned.
    pub fn save(&self, score: u32, now: Millis) {
        if let Err(e) = self.try_save(score, now) {
            log::warn!("[HighScore] save failed, skipping: {:#}", e);
        }
    }

    /// Persist `score` by writing a sibling temp file and renaming it over
    /// the target, so readers never see a half-written record.
    pub fn try_save(&self, score: u32, now: Millis) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let record = HighScoreRecord {
            high_score: score,
            updated_at: now,
        };
        let json = serde_json::to_string(&record)?;

        let tmp = temp_path_for(path);
        {
            let mut file = fs::File::create(&tmp)
                .with_context(|| format!("creating {}", tmp.display()))?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e).with_context(|| format!("replacing {}", path.display()));
        }

        log::debug!("[HighScore] saved {} to {}", score, path.display());
        Ok(())
    }

    /// Save `score` if it beats the stored high score.
    ///
    /// Returns true only when the new record actually reached the disk.
    pub fn record_if_higher(&self, score: u32, now: Millis) -> bool {
        if self.path.is_none() || score <= self.load() {
            return false;
        }
        match self.try_save(score, now) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[HighScore] save failed, skipping: {:#}", e);
                false
            }
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "highscore".into());
    name.push(".tmp");
    path.with_file_name(name)
}
