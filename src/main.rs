//! Terminal runner (default binary).
//!
//! Owns the single live `GameState`, feeds it key presses and timer ticks,
//! and reacts to the cues between successive states (bell, high score).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_nova::config::GameConfig;
use tetris_nova::core::{cues_between, GameCue, GameState, SimpleRng};
use tetris_nova::input::{handle_key_event, should_quit};
use tetris_nova::logging::init_logging;
use tetris_nova::pacing::poll_timeout;
use tetris_nova::scores::ScoreKeeper;
use tetris_nova::term::{FrameBuffer, GameView, HudInfo, TerminalRenderer, Viewport};
use tetris_nova::types::{GameAction, Millis};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let held_logs = init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("[Runner] starting with seed {}", seed);

    let mut term = TerminalRenderer::new();
    let result = match term.enter() {
        Ok(()) => run(&mut term, &config, seed),
        Err(e) => Err(e),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("[Runner] exiting with error: {:#}", e);
    }
    if let Some(logs) = held_logs {
        let _ = logs.flush_to_stderr();
    }
    result
}

fn now_ms() -> Millis {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or(0)
}

fn clock_seed() -> u32 {
    let now = now_ms();
    (now as u32) ^ ((now >> 32) as u32) ^ std::process::id()
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, seed: u32) -> Result<()> {
    let mut scores = ScoreKeeper::open(config.highscore_store());
    let mut rng = SimpleRng::new(seed);
    let mut state = GameState::new_game(&mut rng, now_ms());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudInfo {
            best: scores.best(),
        };
        view.render_into(&state, &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let tick_duration = Duration::from_millis(state.tick_ms() as u64);
        let timeout = poll_timeout(state.is_game_over(), tick_duration, last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        scores.settle(state.score(), now_ms());
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Restart) if state.is_game_over() => {
                            scores.next_game(state.score());
                            state = GameState::new_game(&mut rng, now_ms());
                            last_tick = Instant::now();
                            log::info!("[Runner] new game");
                        }
                        Some(action) => state = state.apply_action(action),
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if !state.is_game_over() && last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let next = state.tick(&mut rng, now_ms());
            for cue in cues_between(&state, &next) {
                on_cue(cue, &next, config, &scores, term)?;
            }
            state = next;
        }
    }
}

fn on_cue(
    cue: GameCue,
    state: &GameState,
    config: &GameConfig,
    scores: &ScoreKeeper,
    term: &mut TerminalRenderer,
) -> Result<()> {
    match cue {
        GameCue::LinesCleared(n) => {
            log::debug!("[Runner] cleared {} line(s), score {}", n, state.score());
        }
        GameCue::GameOver => {
            log::info!(
                "[Runner] game over: score {}, lines {}",
                state.score(),
                state.lines_cleared()
            );
            scores.settle(state.score(), now_ms());
        }
    }
    if config.bell {
        term.bell()?;
    }
    Ok(())
}
