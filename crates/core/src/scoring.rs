//! Scoring module - line clear points and fall-speed progression

use crate::types::{
    Millis, INITIAL_TICK_MS, LINE_SCORES, MIN_TICK_MS, SPEEDUP_INTERVAL_MS, TICK_STEP_MS,
};

/// Points for clearing `lines` rows with a single piece.
///
/// 0, 100, 300, 500, 800 for 0-4 lines; anything else scores nothing.
pub fn score_for_lines(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Fall interval after `elapsed` ms of play.
///
/// Every 30 seconds shortens the interval by 75ms, never below 200ms.
pub fn tick_ms_for_elapsed(elapsed: Millis) -> u32 {
    let steps = elapsed / SPEEDUP_INTERVAL_MS;
    let reduction = steps.saturating_mul(TICK_STEP_MS as u64);
    let faster = (INITIAL_TICK_MS as u64).saturating_sub(reduction);
    faster.max(MIN_TICK_MS as u64) as u32
}
