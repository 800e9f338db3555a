//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so the engine,
//! the terminal front end and the storage layer can all share them.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TICK_MS` | 1000 | Fall interval at game start |
//! | `MIN_TICK_MS` | 200 | Fastest fall interval |
//! | `TICK_STEP_MS` | 75 | Interval reduction per speed-up step |
//! | `SPEEDUP_INTERVAL_MS` | 30000 | Elapsed game time per speed-up step |
//!
//! # Examples
//!
//! ```
//! use tetris_nova_types::{GameAction, PieceKind, Position, BOARD_COLS, BOARD_ROWS};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! let pos = Position::new(0, 3) + Position::DOWN;
//! assert_eq!(pos, Position::new(1, 3));
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 10);
//! ```

use std::ops::Add;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Fall interval when a new game starts (1000ms = 1 second per row)
pub const INITIAL_TICK_MS: u32 = 1000;

/// Lower bound for the fall interval
pub const MIN_TICK_MS: u32 = 200;

/// How much the fall interval shrinks per speed-up step
pub const TICK_STEP_MS: u32 = 75;

/// Elapsed game time between two speed-up steps
pub const SPEEDUP_INTERVAL_MS: u64 = 30_000;

/// Line clear scoring table, indexed by the number of rows removed at once.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Wall-clock milliseconds. Game start time and every `now` argument use it.
pub type Millis = u64;

/// The seven piece kinds
///
/// The kind doubles as the color key for rendering the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in declaration order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_nova_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "I" => Some(PieceKind::I),
            "J" => Some(PieceKind::J),
            "L" => Some(PieceKind::L),
            "O" => Some(PieceKind::O),
            "S" => Some(PieceKind::S),
            "T" => Some(PieceKind::T),
            "Z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// A settled board cell.
///
/// Which piece produced a filled cell is not recorded; color only exists
/// for the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }
}

/// Board-space offset in rows and columns.
///
/// Candidate positions may be negative or past the board edge while a move
/// is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const LEFT: Position = Position::new(0, -1);
    pub const RIGHT: Position = Position::new(0, 1);
    pub const DOWN: Position = Position::new(1, 0);

    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            row: self.row.saturating_add(rhs.row),
            col: self.col.saturating_add(rhs.col),
        }
    }
}

/// Logical player inputs, independent of how they were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no lock, no score)
    SoftDrop,
    /// Rotate piece 90° clockwise with a one-column wall kick
    Rotate,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_nova_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}
