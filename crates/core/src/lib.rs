//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the game engine: board, piece geometry, spawning, line
//! clearing, scoring and speed progression. It has **no dependencies** on UI,
//! storage, clocks or I/O:
//!
//! - **Pure**: every transition borrows a [`GameState`] and returns a new one
//! - **Deterministic**: piece kinds come from an injected [`PieceSource`] and
//!   time is passed in, so a seed plus a timestamp script replays a game
//! - **Total**: operations never fail; game over is a terminal state, not an error
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 settled grid with placement checks, merging and line clearing
//! - [`pieces`]: the seven shape matrices and clockwise rotation
//! - [`rng`]: injectable piece-kind sources (seeded LCG, fixed sequence)
//! - [`spawn`]: the falling piece and spawn placement
//! - [`scoring`]: line clear points and fall-interval progression
//! - [`game_state`]: the state machine (`new_game`, `try_move`, `try_rotate`, `tick`)
//! - [`cues`]: feedback events derived from two successive states
//!
//! # Game Rules
//!
//! - **Randomizer**: uniform independent draws, no bag
//! - **Rotation**: clockwise matrix rotation, retried one column left then right
//! - **Locking**: a piece locks only when a gravity tick cannot move it down
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 lines
//! - **Speed**: fall interval drops 75ms every 30s of play, floored at 200ms
//!
//! # Example
//!
//! ```
//! use tetris_nova_core::{GameState, SimpleRng};
//! use tetris_nova_core::types::{GameAction, Position};
//!
//! let mut rng = SimpleRng::new(12345);
//! let start = 0;
//!
//! let state = GameState::new_game(&mut rng, start);
//! let state = state.apply_action(GameAction::MoveLeft);
//! let state = state.tick(&mut rng, start + 1_000);
//!
//! assert!(!state.is_game_over());
//! assert_eq!(state.current_piece().position.row, 1);
//! assert_eq!(state.try_move(Position::new(-5, 0)), state);
//! ```
//!
//! # Timing
//!
//! The engine has no timer. The caller invokes [`GameState::tick`] every
//! [`GameState::tick_ms`] milliseconds and passes the current time.

pub mod board;
pub mod cues;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod spawn;

pub use tetris_nova_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cues::{cues_between, GameCue};
pub use game_state::GameState;
pub use pieces::{get_initial_shape, rotate_cw, Shape};
pub use rng::{random_kind, CycleSource, PieceSource, SimpleRng};
pub use scoring::{score_for_lines, tick_ms_for_elapsed};
pub use spawn::{spawn, spawn_position, FallingPiece};
