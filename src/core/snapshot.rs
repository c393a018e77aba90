//! Read-only snapshot of the game state for render-facing consumers.
//!
//! The renderer never touches `Game` directly; it reads a snapshot filled by
//! `Game::snapshot_into`, which keeps the view free of engine internals and
//! lets callers reuse one buffer across frames.

use crate::core::piece::ActivePiece;
use crate::types::{Cell, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

/// Render-facing view of the game: grid, active piece, score, status.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Locked cells, row-major: `board[y][x]`.
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActivePiece>,
    pub score: u32,
    pub status: GameStatus,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            status: GameStatus::Running,
        }
    }
}
