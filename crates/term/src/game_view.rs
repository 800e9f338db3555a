//! GameView: draws a game state and its side panel into a [`FrameBuffer`].
//! No terminal access happens here.

use crate::core::{FallingPiece, GameState, Shape};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

const BACKGROUND: Rgb = Rgb::new(0x02, 0x06, 0x17);
const GRID: Rgb = Rgb::new(0x1e, 0x29, 0x3b);
const SETTLED: Rgb = Rgb::new(0x94, 0xa3, 0xb8);
const TEXT: Rgb = Rgb::new(0xf8, 0xfa, 0xfc);
const ACCENT: Rgb = Rgb::new(0x38, 0xbd, 0xf8);
const DANGER: Rgb = Rgb::new(0xf8, 0x71, 0x71);

/// Color of the falling piece of each kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x38, 0xbd, 0xf8),
        PieceKind::J => Rgb::new(0x60, 0xa5, 0xfa),
        PieceKind::L => Rgb::new(0xf5, 0x9e, 0x0b),
        PieceKind::O => Rgb::new(0xfd, 0xe0, 0x47),
        PieceKind::S => Rgb::new(0x34, 0xd3, 0x99),
        PieceKind::T => Rgb::new(0xa8, 0x55, 0xf7),
        PieceKind::Z => Rgb::new(0xfb, 0x71, 0x85),
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Values shown next to the board that the engine does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudInfo {
    /// Best score known to the caller (stored high score or this run's score).
    pub best: u32,
}

/// Renders a game state as a framed board plus a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

/// Top-left of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_COLS as u16) * self.cell_w + 2,
            BOARD_ROWS as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        state: &GameState,
        hud: &HudInfo,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::new(TEXT, BACKGROUND));

        let (frame_w, frame_h) = self.frame_size();
        let panel_w = 16;
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w + panel_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_frame(fb, origin);

        let board = state.board();
        for row in 0..BOARD_ROWS as i8 {
            for col in 0..BOARD_COLS as i8 {
                let filled = board.get(row, col).is_some_and(|c| c.is_filled());
                if filled {
                    self.draw_block(fb, origin, row, col, SETTLED);
                } else {
                    self.draw_empty(fb, origin, row, col);
                }
            }
        }

        if !state.is_game_over() {
            self.draw_piece(fb, origin, state.current_piece());
        }

        self.draw_panel(fb, state, hud, origin.x + frame_w + 2, origin.y);

        if state.is_game_over() {
            self.draw_game_over(fb, origin);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, hud: &HudInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, hud, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, origin: Origin) {
        let (w, h) = self.frame_size();
        let style = Style::new(GRID, BACKGROUND);
        let right = origin.x + w - 1;
        let bottom = origin.y + h - 1;

        for x in origin.x + 1..right {
            fb.put_char(x, origin.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in origin.y + 1..bottom {
            fb.put_char(origin.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        fb.put_char(origin.x, origin.y, '┌', style);
        fb.put_char(right, origin.y, '┐', style);
        fb.put_char(origin.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    /// Terminal position of board cell (row, col), if on the board.
    fn cell_xy(&self, origin: Origin, row: i8, col: i8) -> Option<(u16, u16)> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((
            origin.x + 1 + (col as u16) * self.cell_w,
            origin.y + 1 + row as u16,
        ))
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, row: i8, col: i8, color: Rgb) {
        if let Some((x, y)) = self.cell_xy(origin, row, col) {
            fb.fill_rect(x, y, self.cell_w, 1, '█', Style::new(color, BACKGROUND));
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: Origin, row: i8, col: i8) {
        if let Some((x, y)) = self.cell_xy(origin, row, col) {
            fb.put_char(x + self.cell_w - 1, y, '·', Style::new(GRID, BACKGROUND));
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, origin: Origin, piece: &FallingPiece) {
        let color = piece_color(piece.kind);
        for (row, col) in piece.cells() {
            self.draw_block(fb, origin, row, col, color);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, state: &GameState, hud: &HudInfo, x: u16, y: u16) {
        let label = Style::new(ACCENT, BACKGROUND).bold();
        let value = Style::new(TEXT, BACKGROUND);

        let entries = [
            ("SCORE", state.score().to_string()),
            ("BEST", hud.best.max(state.score()).to_string()),
            ("LINES", state.lines_cleared().to_string()),
            ("SPEED", format!("{}ms", state.tick_ms())),
        ];
        for (i, (name, text)) in entries.iter().enumerate() {
            let row = y + 1 + (i as u16) * 2;
            fb.put_str(x, row, name, label);
            fb.put_str(x + 7, row, text, value);
        }

        if state.score() > hud.best {
            fb.put_str(x, y + 8, "NEW BEST!", Style::new(ACCENT, BACKGROUND).bold());
        }

        let next_y = y + 10;
        fb.put_str(x, next_y, "NEXT", label);
        let next = state.next_piece();
        self.draw_preview(fb, &next.shape, piece_color(next.kind), x, next_y + 1);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, shape: &Shape, color: Rgb, x: u16, y: u16) {
        let style = Style::new(color, BACKGROUND);
        for (row, col) in shape.filled_cells() {
            fb.fill_rect(
                x + (col as u16) * self.cell_w,
                y + row as u16,
                self.cell_w,
                1,
                '█',
                style,
            );
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, origin: Origin) {
        let (frame_w, frame_h) = self.frame_size();
        let mid = origin.y + frame_h / 2;
        let lines = [
            ("GAME OVER", Style::new(DANGER, BACKGROUND).bold()),
            ("R restart  Q quit", Style::new(TEXT, BACKGROUND)),
        ];
        for (i, (text, style)) in lines.iter().enumerate() {
            let len = text.chars().count() as u16;
            let x = origin.x + frame_w.saturating_sub(len) / 2;
            fb.put_str(x, mid - 1 + i as u16, text, *style);
        }
    }
}
