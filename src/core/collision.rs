//! Collision checker - the single gatekeeper before any board mutation.
//!
//! A pure predicate over a candidate placement. Walls and the floor are
//! checked unconditionally; the ceiling never is. Cells above the visible
//! board (y < 0) do not collide, which lets pieces spawn partially off the
//! top and fall into view, and makes a blocked spawn the sole game-over
//! signal. That asymmetry is load-bearing.

use crate::core::board::Board;
use crate::core::piece::ActivePiece;

/// Whether the piece placement overlaps the board contents or exits the
/// board horizontally or through the floor.
pub fn collides(piece: &ActivePiece, board: &Board) -> bool {
    let cols = board.width() as i8;
    let rows = board.height() as i8;

    piece.shape.cells().any(|(dx, dy)| {
        let x = piece.x + dx;
        let y = piece.y + dy;

        if x < 0 || x >= cols || y >= rows {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}
