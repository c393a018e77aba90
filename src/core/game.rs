//! Game controller - ties board, pieces, collision, and timing together.
//!
//! Owns every piece of mutable state (board, active piece, score, status,
//! drop timer, RNG) and exposes the command surface consumed by input
//! handling. All operations are synchronous state transitions; an invalid
//! placement is rejected by discarding the candidate, never by an error.

use crate::core::board::Board;
use crate::core::catalog;
use crate::core::collision::collides;
use crate::core::piece::ActivePiece;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus, DROP_INTERVAL_MS, POINTS_PER_LINE};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    status: GameStatus,
    drop_timer_ms: u32,
    rng: SimpleRng,
}

impl Game {
    /// Create a new running game with the given RNG seed and spawn the
    /// first piece.
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            board: Board::new(),
            active: None,
            score: 0,
            status: GameStatus::Running,
            drop_timer_ms: 0,
            rng: SimpleRng::new(seed),
        };
        game.spawn_piece();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Fill a caller-owned snapshot with the render-facing state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for y in 0..self.board.height() as i8 {
            for x in 0..self.board.width() as i8 {
                out.board[y as usize][x as usize] = self.board.get(x, y).unwrap_or(None);
            }
        }
        out.active = self.active.clone();
        out.score = self.score;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance game time by `delta_ms`.
    ///
    /// Accumulates the drop timer and, once it exceeds the drop interval,
    /// performs one forced drop and resets the timer. Returns whether a
    /// forced drop fired. No-op unless running.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.drop_timer_ms += delta_ms;
        if self.drop_timer_ms > DROP_INTERVAL_MS {
            self.drop_timer_ms = 0;
            self.soft_drop();
            return true;
        }
        false
    }

    /// Try to translate the active piece by (dx, dy).
    ///
    /// The candidate is committed only if collision-free. Returns whether the
    /// move succeeded; the drop path uses a false return to detect "cannot
    /// descend further".
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.translated(dx, dy);
        if collides(&candidate, &self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Try to rotate the active piece 90 degrees clockwise.
    ///
    /// A colliding rotation is discarded silently; the piece keeps its
    /// pre-rotation orientation. No kick offsets are attempted.
    pub fn rotate(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.rotated();
        if collides(&candidate, &self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// One down-step. When the piece cannot descend it locks: merge into the
    /// board, clear full rows, add to the score, spawn the next piece, and
    /// detect game over if the fresh piece collides at spawn.
    pub fn soft_drop(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        if self.try_move(0, 1) {
            return;
        }
        self.lock_piece();
    }

    /// Toggle Running <-> Paused. No-op in GameOver.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    /// Discard all in-progress state and start a fresh episode.
    ///
    /// Board, score, status, and drop timer reset; the RNG sequence
    /// continues from its current state.
    pub fn restart(&mut self) {
        self.board.reset();
        self.score = 0;
        self.status = GameStatus::Running;
        self.drop_timer_ms = 0;
        self.active = None;
        self.spawn_piece();
    }

    /// Apply a command from the abstract input surface.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::TogglePause => {
                self.toggle_pause();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Merge the active piece, clear rows, score, and respawn.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active);
        let lines = self.board.clear_full_rows();
        self.score += lines * POINTS_PER_LINE;
        self.spawn_piece();
    }

    /// Draw a fresh piece and place it at the spawn anchor. A colliding
    /// spawn means the stack has reached the spawn area: game over.
    fn spawn_piece(&mut self) {
        let kind = catalog::draw(&mut self.rng);
        let piece = ActivePiece::spawn(kind);

        if collides(&piece, &self.board) {
            self.status = GameStatus::GameOver;
        }
        // The colliding piece stays visible over the stack; GameOver status
        // gates all further input.
        self.active = Some(piece);
    }
}
