//! Active piece - the currently falling tetromino.
//!
//! Movement and rotation build candidate pieces without mutating the
//! original; the game controller commits a candidate only after the collision
//! checker accepts it.

use crate::core::catalog;
use crate::core::shape::Shape;
use crate::types::{PieceKind, SPAWN_X};

/// The falling piece: a shape mask plus its board anchor.
///
/// The anchor (x, y) is the board coordinate of the mask's top-left corner.
/// The shape is replaced wholesale on rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind at the spawn anchor.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: catalog::shape_for(kind),
            x: SPAWN_X,
            y: 0,
        }
    }

    /// Candidate piece translated by (dx, dy).
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Candidate piece rotated 90 degrees clockwise at the same anchor.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self.clone()
        }
    }
}
