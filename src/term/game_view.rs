//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. It consumes only the
//! read-only snapshot, never the game itself.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Renders the board, active piece, score line, and status banner.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the snapshot into the framebuffer, resizing it to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    self.draw_cell(fb, start_x, start_y, x as i8, y as i8, *kind);
                }
            }
        }

        // Active piece (cells above the top edge are simply not drawn).
        if let Some(active) = &snap.active {
            for (dx, dy) in active.shape.cells() {
                self.draw_cell(fb, start_x, start_y, active.x + dx, active.y + dy, active.kind);
            }
        }

        // Score line under the frame.
        let score_line = format!("Score: {}", snap.score);
        fb.put_str(start_x, start_y + frame_h, &score_line, CellStyle::default());

        // Status banner over the center of the board.
        let banner = match snap.status {
            GameStatus::Running => None,
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
        };
        if let Some(text) = banner {
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(120, 0, 0),
                bold: true,
            };
            let bx = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
            let by = start_y + frame_h / 2;
            fb.put_str(bx, by, text, style);
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    /// Draw one board cell in the piece's catalog color.
    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, kind: PieceKind) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let color: Rgb = kind.color().into();
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: color,
            bold: false,
        };
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + y as u16;
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, py, ' ', style);
        }
    }
}
