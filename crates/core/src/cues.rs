//! Cues module - feedback events derived from two successive states
//!
//! The engine has no side effects. Collaborators that play sounds, stop
//! music or persist a high score compare the state before and after a
//! transition; this module does that comparison in one place.

use arrayvec::ArrayVec;

use crate::game_state::GameState;

/// Something a collaborator may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCue {
    /// `n` rows were cleared by the transition.
    LinesCleared(u32),
    /// The game went from active to terminal.
    GameOver,
}

/// Cues produced by moving from `prev` to `next`, in the order they happened.
pub fn cues_between(prev: &GameState, next: &GameState) -> ArrayVec<GameCue, 2> {
    let mut cues = ArrayVec::new();

    let cleared = next.lines_cleared().saturating_sub(prev.lines_cleared());
    if cleared > 0 {
        cues.push(GameCue::LinesCleared(cleared));
    }

    if !prev.is_game_over() && next.is_game_over() {
        cues.push(GameCue::GameOver);
    }

    cues
}
