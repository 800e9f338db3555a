//! Storage module - high-score persistence
//!
//! The engine never persists anything. This crate is the collaborator that
//! remembers the best score between runs.
//!
//! # File Format
//!
//! A single JSON object:
//!
//! ```text
//! {"highScore":1200,"updatedAt":1700000000000}
//! ```
//!
//! # Failure Policy
//!
//! Storage problems must never reach the game loop:
//!
//! - a missing, empty or corrupt file reads as a high score of 0
//! - negative or non-finite values read as 0, fractional values are floored
//! - write failures are logged and skipped
//!
//! The `try_*` methods expose the underlying errors for callers (and tests)
//! that want them.

pub mod highscore;

pub use tetris_nova_types as types;

pub use highscore::{HighScoreRecord, HighScoreStore};
