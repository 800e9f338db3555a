//! Pieces module - piece shapes and matrix rotation
//!
//! Each kind has one canonical 0/1 matrix (I is 4x4, O is 2x2, the rest 3x3).
//! Rotation is a geometric transform of the matrix, not a table lookup, so
//! every rotation state is derived from the canonical shape.

use crate::types::PieceKind;

/// Largest bounding box of any piece (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A piece's occupied cells inside its own bounding box.
///
/// Storage is a fixed 4x4 grid; only the top-left `rows` x `cols` region is
/// meaningful and everything outside it is always zero, so derived equality
/// compares patterns exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

const I_SHAPE: Shape = Shape::new(
    4,
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: Shape = Shape::new(
    3,
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: Shape = Shape::new(
    3,
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: Shape = Shape::new(
    2,
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: Shape = Shape::new(
    3,
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: Shape = Shape::new(
    3,
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: Shape = Shape::new(
    3,
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

impl Shape {
    /// Build a shape from a padded pattern.
    ///
    /// Cells outside `rows` x `cols` are cleared.
    const fn new(rows: u8, cols: u8, pattern: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                cells[r][c] = if pattern[r][c] != 0 { 1 } else { 0 };
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, cells }
    }

    /// Number of matrix rows.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of matrix columns.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Width of the matrix's top row, used for spawn centering.
    pub fn top_row_width(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at local (row, col) is occupied.
    /// Out-of-box coordinates are never occupied.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col] != 0
    }

    /// Iterate the local (row, col) of every occupied cell, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c] != 0)
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Rotate 90° clockwise about the bounding box.
    ///
    /// An `R x C` matrix becomes `C x R` with `out[c][R-1-r] = in[r][c]`.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..rows {
            for c in 0..cols {
                cells[c][rows - 1 - r] = self.cells[r][c];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Canonical, unrotated shape for a piece kind.
///
/// Returns a fresh value; callers never share the template.
pub fn get_initial_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Free-function form of [`Shape::rotate_cw`].
pub fn rotate_cw(shape: &Shape) -> Shape {
    shape.rotate_cw()
}
