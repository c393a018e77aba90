//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds the
//! kind of a locked piece. Uses a flat array for cache locality and
//! zero-allocation. Coordinates: (x, y) with x ranging left to right and y
//! top to bottom.
//!
//! The board performs no placement validation: the collision checker is the
//! single gatekeeper, and `merge` must only ever see a collision-free piece.

use crate::core::piece::ActivePiece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the in-bounds cell at (x, y) holds a locked piece.
    ///
    /// Callers must pass in-bounds coordinates; the collision checker screens
    /// bounds before occupancy.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Reinitialize every cell to empty.
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Lock a piece into the grid: every filled shape cell is written as the
    /// piece's kind at the piece's anchor offset.
    ///
    /// Precondition: the placement is collision-free (all cells in bounds).
    pub fn merge(&mut self, piece: &ActivePiece) {
        for (dx, dy) in piece.shape.cells() {
            let x = piece.x + dx;
            let y = piece.y + dy;
            debug_assert!(
                x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8,
                "merge precondition violated at ({}, {})",
                x,
                y
            );
            self.cells[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)] = Some(piece.kind);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shifting all rows above down by one and inserting an
    /// empty row at the top. Relative order of remaining rows is preserved.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges safely.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear all full rows, scanning bottom to top, and return the count.
    ///
    /// After removing a row the same index is examined again: the row shifted
    /// into its place may itself be full, which matters for stacked or
    /// non-contiguous full rows in a single pass.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
