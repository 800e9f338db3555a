//! Spawn module - the falling piece and how new ones enter the board

use crate::pieces::{get_initial_shape, Shape};
use crate::rng::PieceSource;
use crate::types::{PieceKind, Position, BOARD_COLS};

/// The piece under player and gravity control.
///
/// `position` is the board-space offset of the shape matrix's top-left
/// corner. Transitions replace the whole value rather than editing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl FallingPiece {
    /// Unrotated piece of `kind` at `position`.
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            shape: get_initial_shape(kind),
            position,
        }
    }

    /// Same piece at a different position
    pub fn at(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Board-space (row, col) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.filled_cells().map(move |(dr, dc)| {
            (
                self.position.row.saturating_add(dr),
                self.position.col.saturating_add(dc),
            )
        })
    }
}

/// Spawn position for a shape: row 0, horizontally centered on the width of
/// the shape's top row.
pub fn spawn_position(shape: &Shape) -> Position {
    let col = (BOARD_COLS as i8 - shape.top_row_width() as i8).div_euclid(2);
    Position::new(0, col)
}

/// Draw a kind from `source` and place its unrotated shape at the spawn position.
pub fn spawn(source: &mut impl PieceSource) -> FallingPiece {
    let kind = source.next_kind();
    let shape = get_initial_shape(kind);
    FallingPiece {
        kind,
        shape,
        position: spawn_position(&shape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CycleSource;

    #[test]
    fn test_spawn_columns() {
        let expected = [
            (PieceKind::I, 3),
            (PieceKind::J, 3),
            (PieceKind::L, 3),
            (PieceKind::O, 4),
            (PieceKind::S, 3),
            (PieceKind::T, 3),
            (PieceKind::Z, 3),
        ];
        for (kind, col) in expected {
            let piece = spawn(&mut CycleSource::repeat(kind));
            assert_eq!(piece.kind, kind);
            assert_eq!(piece.position, Position::new(0, col), "{:?}", kind);
            assert_eq!(piece.shape, get_initial_shape(kind));
        }
    }

    #[test]
    fn test_piece_cells_are_offset() {
        let piece = FallingPiece::new(PieceKind::O, Position::new(5, 2));
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 2), (5, 3), (6, 2), (6, 3)]);
    }

    #[test]
    fn test_at_keeps_shape() {
        let piece = FallingPiece::new(PieceKind::T, Position::new(0, 3));
        let rotated = FallingPiece {
            shape: piece.shape.rotate_cw(),
            ..piece
        };
        let moved = rotated.at(Position::new(4, 4));
        assert_eq!(moved.shape, rotated.shape);
        assert_eq!(moved.position, Position::new(4, 4));
    }
}
