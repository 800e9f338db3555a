//! Input poll pacing for the game loop.

use std::time::Duration;

/// How long to wait for a key while the game is over and nothing is ticking.
pub const IDLE_POLL: Duration = Duration::from_millis(500);

/// How long the loop may block waiting for input.
///
/// An active game waits until its next gravity tick is due. A finished game
/// has no tick to wait for, so it idles for [`IDLE_POLL`] per iteration
/// instead of spinning on an already-expired deadline.
pub fn poll_timeout(game_over: bool, tick: Duration, since_last_tick: Duration) -> Duration {
    if game_over {
        IDLE_POLL
    } else {
        tick.saturating_sub(since_last_tick)
    }
}
