//! Best-score bookkeeping between the game loop and the high-score file.

use crate::storage::HighScoreStore;
use crate::types::Millis;

/// Tracks the record a game is playing against and persists improvements.
#[derive(Debug, Clone)]
pub struct ScoreKeeper {
    store: HighScoreStore,
    /// Record at the start of the current game.
    best: u32,
}

impl ScoreKeeper {
    /// Load the stored record (0 when absent or unreadable).
    pub fn open(store: HighScoreStore) -> Self {
        let best = store.load();
        Self { store, best }
    }

    /// The record the current game is trying to beat.
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Persist `score` if it beats the stored record.
    ///
    /// Called when a game ends and when the player quits mid-game. Returns
    /// whether a new record was written.
    pub fn settle(&self, score: u32, now: Millis) -> bool {
        let saved = self.store.record_if_higher(score, now);
        if saved {
            log::info!("[Scores] new high score {}", score);
        }
        saved
    }

    /// Start a new game after one that scored `finished`.
    pub fn next_game(&mut self, finished: u32) {
        self.best = self.best.max(finished);
    }
}
