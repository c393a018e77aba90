//! Shape masks - binary matrices marking the filled cells of a piece.
//!
//! A shape is a small 2D binary matrix (rows of equal length, at most 4x4)
//! stored inline. Rotation produces a new candidate shape; nothing here
//! touches the board, so the geometry transform is independently testable.

use arrayvec::ArrayVec;

/// Maximum side length of a shape's bounding box.
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// 2D binary shape mask. Every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Build a shape from a rectangular 0/1 mask.
    ///
    /// Panics if the mask is empty, ragged, or exceeds the 4x4 bound; shapes
    /// come from the static catalog, so a bad mask is a programming error.
    pub fn from_mask(mask: &[&[u8]]) -> Self {
        assert!(!mask.is_empty() && mask.len() <= MAX_SHAPE_DIM);
        let width = mask[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_DIM);

        let mut rows = ArrayVec::new();
        for row in mask {
            assert_eq!(row.len(), width, "ragged shape mask");
            rows.push(row.iter().map(|&v| v != 0).collect());
        }
        Self { rows }
    }

    /// Number of rows in the bounding box.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the bounding box.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether the cell at (x, y) within the bounding box is filled.
    pub fn filled(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// Iterate the filled cells as (dx, dy) offsets from the piece anchor.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &f)| f)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// The 90-degree clockwise rotation of this shape.
    ///
    /// Transpose-and-reverse: for an R x C shape the result is C x R with
    /// `rotated[x][R - 1 - y] = original[y][x]`.
    pub fn rotated_cw(&self) -> Self {
        let r = self.height();
        let c = self.width();

        let mut rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM> = (0..c)
            .map(|_| (0..r).map(|_| false).collect())
            .collect();

        for (y, row) in self.rows.iter().enumerate() {
            for (x, &f) in row.iter().enumerate() {
                rows[x][r - 1 - y] = f;
            }
        }

        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mask_dimensions() {
        let shape = Shape::from_mask(&[&[1, 1, 1, 1]]);
        assert_eq!(shape.height(), 1);
        assert_eq!(shape.width(), 4);
        assert_eq!(shape.cells().count(), 4);
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let bar = Shape::from_mask(&[&[1, 1, 1, 1]]);
        let rotated = bar.rotated_cw();
        assert_eq!(rotated.height(), 4);
        assert_eq!(rotated.width(), 1);
        assert!(rotated.filled(0, 0) && rotated.filled(0, 3));
    }

    #[test]
    fn test_rotation_transpose_reverse() {
        // T shape: filled cell moves per rotated[x][R-1-y] = original[y][x].
        let t = Shape::from_mask(&[&[1, 1, 1], &[0, 1, 0]]);
        let rotated = t.rotated_cw();
        assert_eq!(rotated.height(), 3);
        assert_eq!(rotated.width(), 2);
        // original[0][0] -> rotated[0][1]
        assert!(rotated.filled(1, 0));
        // original[1][1] -> rotated[1][0]
        assert!(rotated.filled(0, 1));
        // original[1][0] is empty -> rotated[0][0] empty
        assert!(!rotated.filled(0, 0));
    }

    #[test]
    fn test_four_rotations_identity() {
        let shapes = [
            Shape::from_mask(&[&[1, 1, 1, 1]]),
            Shape::from_mask(&[&[1, 1], &[1, 1]]),
            Shape::from_mask(&[&[1, 1, 1], &[0, 1, 0]]),
            Shape::from_mask(&[&[1, 1, 0], &[0, 1, 1]]),
        ];
        for shape in shapes {
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape);
        }
    }
}
