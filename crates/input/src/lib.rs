//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Gesture
//! recognition, key repeat and timing stay with the caller; this layer only
//! names the move a key stands for.

pub mod map;

pub use tetris_nova_types as types;

pub use map::{handle_key_event, should_quit};
