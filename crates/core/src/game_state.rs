//! Game state module - the engine's state machine
//!
//! A [`GameState`] is an immutable snapshot. Every operation borrows the
//! current snapshot and returns its successor, so the caller owns the only
//! "current state" and can compare old and new values to drive feedback.
//!
//! States are `Active` (`is_game_over() == false`) and `Terminal`. A
//! terminal state has no outgoing transitions; starting over is
//! [`GameState::new_game`], not a transition.
//!
//! Randomness and time are explicit arguments: [`PieceSource`] for new piece
//! kinds and a `now` timestamp for difficulty progression.

use crate::board::Board;
use crate::rng::PieceSource;
use crate::scoring::{score_for_lines, tick_ms_for_elapsed};
use crate::spawn::{spawn, FallingPiece};
use crate::types::{GameAction, Millis, Position, INITIAL_TICK_MS};

/// Rotation candidates, tried in order: in place, one column left, one column right.
const WALL_KICKS: [Position; 3] = [Position::new(0, 0), Position::LEFT, Position::RIGHT];

/// Complete game state
///
/// Fields are private and [`GameState::new_game`] is the only constructor,
/// so the falling piece of an active state is always legally placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current: FallingPiece,
    next: FallingPiece,
    score: u32,
    lines_cleared: u32,
    game_over: bool,
    tick_ms: u32,
    started_at: Millis,
}

impl GameState {
    /// Fresh game: empty board, two independently spawned pieces, zero
    /// score, initial fall interval, started at `now`.
    pub fn new_game(source: &mut impl PieceSource, now: Millis) -> Self {
        let current = spawn(source);
        let next = spawn(source);

        Self {
            board: Board::new(),
            current,
            next,
            score: 0,
            lines_cleared: 0,
            game_over: false,
            tick_ms: INITIAL_TICK_MS,
            started_at: now,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> &FallingPiece {
        &self.current
    }

    pub fn next_piece(&self) -> &FallingPiece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Interval the caller should wait before the next [`GameState::tick`].
    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    /// Shift the falling piece by `delta`.
    ///
    /// A rejected move (blocked, out of bounds, or game over) returns a state
    /// equal to `self`.
    #[must_use]
    pub fn try_move(&self, delta: Position) -> Self {
        self.moved(delta).unwrap_or_else(|| self.clone())
    }

    fn moved(&self, delta: Position) -> Option<Self> {
        if self.game_over {
            return None;
        }

        let target = self.current.position + delta;
        if !self.board.can_place(&self.current.shape, target) {
            return None;
        }

        Some(Self {
            current: self.current.at(target),
            ..self.clone()
        })
    }

    /// Rotate the falling piece clockwise, with a one-column wall kick.
    ///
    /// Returns a state equal to `self` if no candidate position fits.
    #[must_use]
    pub fn try_rotate(&self) -> Self {
        if self.game_over {
            return self.clone();
        }

        let rotated = self.current.shape.rotate_cw();
        let origin = self.current.position;

        WALL_KICKS
            .iter()
            .map(|&kick| origin + kick)
            .find(|&target| self.board.can_place(&rotated, target))
            .map(|target| Self {
                current: FallingPiece {
                    shape: rotated,
                    position: target,
                    ..self.current
                },
                ..self.clone()
            })
            .unwrap_or_else(|| self.clone())
    }

    /// One gravity step.
    ///
    /// The piece falls one row if it can. Otherwise it is merged into the
    /// board, full rows are cleared and scored, the next piece is promoted and
    /// a new next piece is drawn from `source`. If the promoted piece does not
    /// fit at its spawn position the returned state is terminal, with the
    /// merge and clear already applied.
    ///
    /// Successful non-terminal ticks also recompute the fall interval from
    /// the time elapsed since the game started.
    #[must_use]
    pub fn tick(&self, source: &mut impl PieceSource, now: Millis) -> Self {
        if self.game_over {
            return self.clone();
        }

        if let Some(moved) = self.moved(Position::DOWN) {
            return moved.adjust_difficulty(now);
        }

        let landed = self.lock_and_spawn(source);
        if landed.game_over {
            return landed;
        }
        landed.adjust_difficulty(now)
    }

    /// Merge the falling piece, clear lines, and promote the next piece.
    fn lock_and_spawn(&self, source: &mut impl PieceSource) -> Self {
        let merged = self.board.merge(&self.current);
        let (board, cleared) = merged.clear_full_lines();

        let current = self.next;
        let next = spawn(source);
        let game_over = !board.can_place(&current.shape, current.position);

        Self {
            board,
            current,
            next,
            score: self.score.saturating_add(score_for_lines(cleared)),
            lines_cleared: self.lines_cleared.saturating_add(cleared as u32),
            game_over,
            tick_ms: self.tick_ms,
            started_at: self.started_at,
        }
    }

    /// Recompute the fall interval; unchanged interval returns `self` as is.
    fn adjust_difficulty(self, now: Millis) -> Self {
        let faster = tick_ms_for_elapsed(now.saturating_sub(self.started_at));
        if faster == self.tick_ms {
            self
        } else {
            Self {
                tick_ms: faster,
                ..self
            }
        }
    }

    /// Apply a player action.
    ///
    /// Soft drop is a single one-row move and never locks the piece.
    /// `Restart` is not a transition: it returns `self` unchanged and callers
    /// start over with [`GameState::new_game`].
    #[must_use]
    pub fn apply_action(&self, action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => self.try_move(Position::LEFT),
            GameAction::MoveRight => self.try_move(Position::RIGHT),
            GameAction::SoftDrop => self.try_move(Position::DOWN),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Restart => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{CycleSource, SimpleRng};
    use crate::types::{Cell, PieceKind, BOARD_COLS};

    const T0: Millis = 1_700_000_000_000;

    /// Build a state directly, bypassing spawn, for scenario setup.
    fn state_with(board: Board, current: FallingPiece, next: FallingPiece) -> GameState {
        GameState {
            board,
            current,
            next,
            score: 0,
            lines_cleared: 0,
            game_over: false,
            tick_ms: INITIAL_TICK_MS,
            started_at: T0,
        }
    }

    fn fill_row(board: &mut Board, row: i8, cols: impl IntoIterator<Item = i8>) {
        for col in cols {
            board.set(row, col, Cell::Filled);
        }
    }

    fn vertical_i(position: Position) -> FallingPiece {
        let piece = FallingPiece::new(PieceKind::I, position);
        FallingPiece {
            shape: piece.shape.rotate_cw(),
            ..piece
        }
    }

    #[test]
    fn test_new_game() {
        let mut source = CycleSource::new([PieceKind::T, PieceKind::O]);
        let state = GameState::new_game(&mut source, T0);

        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_piece().kind, PieceKind::T);
        assert_eq!(state.current_piece().position, Position::new(0, 3));
        assert_eq!(state.next_piece().kind, PieceKind::O);
        assert_eq!(state.next_piece().position, Position::new(0, 4));
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines_cleared(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.tick_ms(), 1000);
        assert_eq!(state.started_at(), T0);
    }

    #[test]
    fn test_new_game_is_reproducible_with_seed() {
        let a = GameState::new_game(&mut SimpleRng::new(99), T0);
        let b = GameState::new_game(&mut SimpleRng::new(99), T0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_try_move() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);

        let left = state.try_move(Position::LEFT);
        assert_eq!(left.current_piece().position, Position::new(0, 2));

        let right = state.try_move(Position::RIGHT);
        assert_eq!(right.current_piece().position, Position::new(0, 4));

        let down = state.try_move(Position::DOWN);
        assert_eq!(down.current_piece().position, Position::new(1, 3));

        // Moving never touches anything but the piece position.
        assert_eq!(down.board(), state.board());
        assert_eq!(down.next_piece(), state.next_piece());
        assert_eq!(down.tick_ms(), state.tick_ms());
    }

    #[test]
    fn test_try_move_rejected_returns_equal_state() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);
        let mut moved = state.clone();
        for _ in 0..BOARD_COLS {
            moved = moved.try_move(Position::LEFT);
        }
        assert_eq!(moved.current_piece().position.col, 0);
        assert_eq!(moved.try_move(Position::LEFT), moved);

        // Upward moves out of the board are rejected too.
        assert_eq!(state.try_move(Position::new(-1, 0)), state);
    }

    #[test]
    fn test_o_piece_falls_until_floor() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::O), T0);
        let mut current = state;
        for expected_row in 1..=18 {
            let next = current.try_move(Position::DOWN);
            assert_eq!(next.current_piece().position.row, expected_row);
            current = next;
        }
        assert_eq!(current.try_move(Position::DOWN), current);
    }

    #[test]
    fn test_try_move_collision_with_board() {
        let mut board = Board::new();
        board.set(5, 4, Cell::Filled);
        let piece = FallingPiece::new(PieceKind::O, Position::new(3, 4));
        let state = state_with(board, piece, piece);

        assert_eq!(state.try_move(Position::DOWN), state);
        assert_eq!(
            state.try_move(Position::RIGHT).current_piece().position,
            Position::new(3, 5)
        );
    }

    #[test]
    fn test_try_rotate_in_place() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);
        let rotated = state.try_rotate();
        assert_eq!(rotated.current_piece().position, state.current_piece().position);
        assert_eq!(
            rotated.current_piece().shape,
            state.current_piece().shape.rotate_cw()
        );
    }

    #[test]
    fn test_try_rotate_kicks_right_off_left_wall() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);
        let mut east = state.try_rotate();
        loop {
            let next = east.try_move(Position::LEFT);
            if next == east {
                break;
            }
            east = next;
        }
        // East-facing T has an empty left column, so the box hangs off the wall.
        assert_eq!(east.current_piece().position.col, -1);

        let south = east.try_rotate();
        assert_ne!(south, east);
        assert_eq!(south.current_piece().position, Position::new(0, 0));
        assert_eq!(
            south.current_piece().shape,
            east.current_piece().shape.rotate_cw()
        );
    }

    #[test]
    fn test_try_rotate_kicks_left_off_right_wall() {
        let piece = vertical_i(Position::new(5, 7));
        let state = state_with(Board::new(), piece, piece);

        let rotated = state.try_rotate();
        assert_eq!(rotated.current_piece().position, Position::new(5, 6));
    }

    #[test]
    fn test_try_rotate_prefers_left_kick_over_right() {
        let piece = FallingPiece::new(PieceKind::T, Position::new(5, 4));
        let mut board = Board::new();
        // Only the in-place candidate's bottom cell is taken; both side kicks fit.
        board.set(7, 5, Cell::Filled);
        let state = state_with(board, piece, piece);

        let rotated_shape = piece.shape.rotate_cw();
        assert!(!state.board().can_place(&rotated_shape, Position::new(5, 4)));
        assert!(state.board().can_place(&rotated_shape, Position::new(5, 3)));
        assert!(state.board().can_place(&rotated_shape, Position::new(5, 5)));

        let rotated = state.try_rotate();
        assert_eq!(rotated.current_piece().position, Position::new(5, 3));
        assert_eq!(rotated.current_piece().shape, rotated_shape);
    }

    #[test]
    fn test_try_rotate_blocked_returns_equal_state() {
        let mut board = Board::new();
        // T sunk into a slot: every kick candidate hits the floor row or a wall.
        fill_row(&mut board, 19, 0..BOARD_COLS as i8);
        fill_row(&mut board, 18, [0, 1, 5, 6, 7, 8, 9]);
        fill_row(&mut board, 17, [0, 1, 5, 6, 7, 8, 9]);
        fill_row(&mut board, 16, [0, 1, 2, 4, 5, 6, 7, 8, 9]);
        // T pointing up at rows 17-18, cols 2..4
        let piece = FallingPiece::new(PieceKind::T, Position::new(17, 2));
        assert!(board.can_place(&piece.shape, piece.position));
        let state = state_with(board, piece, piece);

        assert_eq!(state.try_rotate(), state);
    }

    #[test]
    fn test_tick_moves_piece_down() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);
        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::S), T0 + 10);
        assert_eq!(ticked.current_piece().position, Position::new(1, 3));
        assert_eq!(ticked.next_piece(), state.next_piece());
        assert_eq!(ticked.tick_ms(), 1000);
    }

    #[test]
    fn test_tick_locks_and_promotes_next() {
        let current = FallingPiece::new(PieceKind::O, Position::new(18, 0));
        let next = FallingPiece::new(PieceKind::T, Position::new(0, 3));
        let state = state_with(Board::new(), current, next);

        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::Z), T0);

        assert_eq!(ticked.board().filled_count(), 4);
        assert_eq!(ticked.board().get(19, 0), Some(Cell::Filled));
        assert_eq!(ticked.current_piece(), &next);
        assert_eq!(ticked.next_piece().kind, PieceKind::Z);
        assert_eq!(ticked.next_piece().position, Position::new(0, 3));
        assert_eq!(ticked.score(), 0);
        assert_eq!(ticked.lines_cleared(), 0);
        assert!(!ticked.is_game_over());
    }

    #[test]
    fn test_tick_clears_single_line() {
        let mut board = Board::new();
        fill_row(&mut board, 19, 0..9);
        board.set(18, 0, Cell::Filled);
        // Vertical I fills col 9 on rows 16..=19.
        let current = vertical_i(Position::new(16, 7));
        assert!(board.can_place(&current.shape, current.position));
        let next = FallingPiece::new(PieceKind::T, Position::new(0, 3));
        let state = state_with(board, current, next);

        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::O), T0);

        assert_eq!(ticked.lines_cleared(), 1);
        assert_eq!(ticked.score(), 100);
        assert!(ticked.board().row_cells(0).iter().all(|c| *c == Cell::Empty));
        // Everything above the cleared row slid down by one.
        assert_eq!(ticked.board().get(19, 0), Some(Cell::Filled));
        assert_eq!(ticked.board().get(17, 9), Some(Cell::Filled));
        assert_eq!(ticked.board().get(18, 9), Some(Cell::Filled));
        assert_eq!(ticked.board().get(19, 9), Some(Cell::Filled));
        assert_eq!(ticked.board().get(16, 9), Some(Cell::Empty));
        assert_eq!(ticked.board().filled_count(), 4);
    }

    #[test]
    fn test_tick_clears_tetris() {
        let mut board = Board::new();
        for row in 16..20 {
            fill_row(&mut board, row, 0..9);
        }
        let current = vertical_i(Position::new(16, 7));
        let next = FallingPiece::new(PieceKind::T, Position::new(0, 3));
        let state = state_with(board, current, next);

        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::O), T0);
        assert_eq!(ticked.lines_cleared(), 4);
        assert_eq!(ticked.score(), 800);
        assert_eq!(ticked.board(), &Board::new());
    }

    #[test]
    fn test_tick_game_over_keeps_merge_and_score() {
        let mut board = Board::new();
        fill_row(&mut board, 19, 4..BOARD_COLS as i8);
        // Blockers under the next piece's spawn, two rows deep so the line
        // clear shifting them down still leaves the spawn blocked.
        board.set(0, 4, Cell::Filled);
        board.set(1, 4, Cell::Filled);

        // Horizontal I resting on the floor: cells row 19, cols 0..4.
        let current = FallingPiece::new(PieceKind::I, Position::new(18, 0));
        assert!(board.can_place(&current.shape, current.position));
        let next = FallingPiece::new(PieceKind::O, Position::new(0, 4));
        let state = state_with(board, current, next);

        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::T), T0);

        assert!(ticked.is_game_over());
        assert_eq!(ticked.lines_cleared(), 1);
        assert_eq!(ticked.score(), 100);
        assert_eq!(ticked.board().get(1, 4), Some(Cell::Filled));
        assert_eq!(ticked.board().get(2, 4), Some(Cell::Filled));
        assert_eq!(ticked.board().filled_count(), 2);
        assert_eq!(ticked.current_piece(), &next);
    }

    #[test]
    fn test_tick_game_over_without_clear() {
        let mut board = Board::new();
        board.set(0, 4, Cell::Filled);
        let current = FallingPiece::new(PieceKind::O, Position::new(18, 0));
        let next = FallingPiece::new(PieceKind::O, Position::new(0, 4));
        let state = state_with(board, current, next);

        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::T), T0);
        assert!(ticked.is_game_over());
        assert_eq!(ticked.board().get(19, 0), Some(Cell::Filled));
        assert_eq!(ticked.board().filled_count(), 5);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut board = Board::new();
        board.set(0, 4, Cell::Filled);
        let current = FallingPiece::new(PieceKind::O, Position::new(18, 0));
        let next = FallingPiece::new(PieceKind::O, Position::new(0, 4));
        let over =
            state_with(board, current, next).tick(&mut CycleSource::repeat(PieceKind::T), T0);
        assert!(over.is_game_over());

        let mut source = CycleSource::repeat(PieceKind::I);
        assert_eq!(over.tick(&mut source, T0 + 120_000), over);
        assert_eq!(over.try_move(Position::LEFT), over);
        assert_eq!(over.try_move(Position::DOWN), over);
        assert_eq!(over.try_rotate(), over);
        assert_eq!(over.apply_action(GameAction::Rotate), over);
    }

    #[test]
    fn test_difficulty_after_65_seconds() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);
        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::T), T0 + 65_000);
        assert_eq!(ticked.tick_ms(), 850);
    }

    #[test]
    fn test_difficulty_applied_after_lock() {
        let current = FallingPiece::new(PieceKind::O, Position::new(18, 0));
        let next = FallingPiece::new(PieceKind::T, Position::new(0, 3));
        let state = state_with(Board::new(), current, next);

        let ticked = state.tick(&mut CycleSource::repeat(PieceKind::Z), T0 + 31_000);
        assert_eq!(ticked.tick_ms(), 925);
    }

    #[test]
    fn test_player_moves_do_not_adjust_difficulty() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);
        let moved = state
            .try_move(Position::DOWN)
            .try_rotate()
            .try_move(Position::LEFT);
        assert_eq!(moved.tick_ms(), INITIAL_TICK_MS);
    }

    #[test]
    fn test_horizontal_moves_never_lock() {
        let current = FallingPiece::new(PieceKind::O, Position::new(18, 4));
        let state = state_with(Board::new(), current, current);

        let moved = state
            .try_move(Position::LEFT)
            .try_move(Position::LEFT)
            .try_rotate()
            .try_move(Position::DOWN);
        assert_eq!(moved.board().filled_count(), 0);
        assert_eq!(moved.current_piece().position, Position::new(18, 2));
        assert_eq!(moved.score(), 0);
    }

    #[test]
    fn test_apply_action() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::T), T0);
        assert_eq!(
            state.apply_action(GameAction::MoveLeft),
            state.try_move(Position::LEFT)
        );
        assert_eq!(
            state.apply_action(GameAction::MoveRight),
            state.try_move(Position::RIGHT)
        );
        assert_eq!(
            state.apply_action(GameAction::SoftDrop),
            state.try_move(Position::DOWN)
        );
        assert_eq!(state.apply_action(GameAction::Rotate), state.try_rotate());
        assert_eq!(state.apply_action(GameAction::Restart), state);
    }

    #[test]
    fn test_soft_drop_to_floor_then_tick_locks() {
        let state = GameState::new_game(&mut CycleSource::repeat(PieceKind::O), T0);
        let mut current = state;
        for _ in 0..30 {
            current = current.apply_action(GameAction::SoftDrop);
        }
        assert_eq!(current.current_piece().position.row, 18);
        assert_eq!(current.board().filled_count(), 0);

        let locked = current.tick(&mut CycleSource::repeat(PieceKind::O), T0);
        assert_eq!(locked.board().filled_count(), 4);
        assert_eq!(locked.current_piece().position, Position::new(0, 4));
    }
}
