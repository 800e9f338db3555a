//! Tetris Nova (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof:
//! - `core`: the pure, deterministic game engine
//! - `types`: shared constants and value types
//! - `input`: key mapping for the terminal front end
//! - `term`: framebuffer view and terminal renderer
//! - `storage`: high-score persistence
//!
//! The runner's own pieces live here too so they can be tested without a
//! terminal: `config` (environment settings), `logging` (logger setup),
//! `pacing` (input poll timeouts) and `scores` (best-score bookkeeping).

pub mod config;
pub mod logging;
pub mod pacing;
pub mod scores;

pub use tetris_nova_core as core;
pub use tetris_nova_input as input;
pub use tetris_nova_storage as storage;
pub use tetris_nova_term as term;
pub use tetris_nova_types as types;
