//! Board module - manages the settled grid
//!
//! The board is a 20x10 grid where each cell is empty or filled.
//! Uses a flat array so the fixed dimensions are part of the type and rows
//! can never be ragged.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::spawn::FallingPiece;
use crate::types::{Cell, Position, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS as usize {
            return false;
        }
        self.row_cells(row).iter().all(|cell| cell.is_filled())
    }

    /// Cells of one row, left to right.
    ///
    /// Panics if `row` is out of range.
    pub fn row_cells(&self, row: usize) -> &[Cell] {
        let width = BOARD_COLS as usize;
        let start = row * width;
        &self.cells[start..start + width]
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// True iff every filled cell of `shape`, offset by `position`, lands in
    /// bounds on an empty cell. No partial placement.
    pub fn can_place(&self, shape: &Shape, position: Position) -> bool {
        shape.filled_cells().all(|(dr, dc)| {
            self.is_vacant(position.row.saturating_add(dr), position.col.saturating_add(dc))
        })
    }

    /// Return a copy of the board with the piece's cells filled.
    ///
    /// Cells that fall outside the board are skipped.
    pub fn merge(&self, piece: &FallingPiece) -> Board {
        let mut out = self.clone();
        for (dr, dc) in piece.shape.filled_cells() {
            out.set(
                piece.position.row.saturating_add(dr),
                piece.position.col.saturating_add(dc),
                Cell::Filled,
            );
        }
        out
    }

    /// Return a copy of the board with all full rows removed and the number
    /// of rows removed.
    pub fn clear_full_lines(&self) -> (Board, usize) {
        let mut out = self.clone();
        let cleared = out.clear_full_rows().len();
        (out, cleared)
    }

    /// Clear all full rows in place and return the row indices that were
    /// cleared (sorted bottom to top)
    ///
    /// Surviving rows keep their order and slide down; empty rows fill the top.
    /// Uses a two-pointer pass with no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, { BOARD_ROWS as usize }> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_COLS as usize;
        let mut write_row = BOARD_ROWS as usize;

        // Scan from bottom to top
        for read_row in (0..BOARD_ROWS as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the rows left over at the top
        self.cells[..write_row * width].fill(Cell::Empty);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
