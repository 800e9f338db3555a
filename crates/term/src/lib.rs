//! Terminal rendering for the puzzle engine.
//!
//! Rendering is split in two:
//! - [`GameView`] draws a `GameState` into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes frames to the terminal via crossterm
//!
//! Board cells are drawn two columns wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_nova_core as core;
pub use tetris_nova_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, HudInfo, Viewport};
pub use renderer::{changed_rows, encode_diff_into, encode_full_into, TerminalRenderer};
