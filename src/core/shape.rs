//! Shape module - piece occupancy matrices and rotation
//!
//! A shape is a small binary matrix (at most 4x4) stored as one bitmask per
//! row. Occupancy is purely boolean; which kind filled a cell is tracked
//! separately by the active piece and the board. Rotation is the classic
//! transpose-and-reverse of the matrix, so non-square shapes swap their
//! width and height.

use crate::types::PieceKind;

/// Maximum extent of a shape matrix along either axis
pub const MAX_SHAPE_DIM: u8 = 4;

/// A piece occupancy matrix. Bit `x` of `rows[y]` is set when the cell at
/// column `x`, row `y` is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [u8; MAX_SHAPE_DIM as usize],
}

impl Shape {
    /// The rotation-0 matrix for a piece kind.
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(4, &[0b1111]),
            PieceKind::J => Self::from_rows(3, &[0b001, 0b111]),
            PieceKind::L => Self::from_rows(3, &[0b100, 0b111]),
            PieceKind::O => Self::from_rows(2, &[0b11, 0b11]),
            PieceKind::S => Self::from_rows(3, &[0b110, 0b011]),
            PieceKind::T => Self::from_rows(3, &[0b010, 0b111]),
            PieceKind::Z => Self::from_rows(3, &[0b011, 0b110]),
        }
    }

    fn from_rows(width: u8, rows: &[u8]) -> Self {
        debug_assert!(width <= MAX_SHAPE_DIM);
        debug_assert!(rows.len() <= MAX_SHAPE_DIM as usize);
        let mut packed = [0u8; MAX_SHAPE_DIM as usize];
        packed[..rows.len()].copy_from_slice(rows);
        Self {
            width,
            height: rows.len() as u8,
            rows: packed,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (x, y) is filled. Out-of-matrix
    /// coordinates read as empty.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && (self.rows[y as usize] >> x) & 1 == 1
    }

    /// The matrix rotated 90 degrees clockwise.
    pub fn rotated_cw(&self) -> Self {
        let mut out = Self {
            width: self.height,
            height: self.width,
            rows: [0; MAX_SHAPE_DIM as usize],
        };
        for y in 0..out.height {
            for x in 0..out.width {
                // new[y][x] = old[h-1-x][y]
                if self.filled(y, self.height - 1 - x) {
                    out.rows[y as usize] |= 1 << x;
                }
            }
        }
        out
    }

    /// The matrix rotated 90 degrees counter-clockwise.
    pub fn rotated_ccw(&self) -> Self {
        let mut out = Self {
            width: self.height,
            height: self.width,
            rows: [0; MAX_SHAPE_DIM as usize],
        };
        for y in 0..out.height {
            for x in 0..out.width {
                // new[y][x] = old[x][w-1-y]
                if self.filled(self.width - 1 - y, x) {
                    out.rows[y as usize] |= 1 << x;
                }
            }
        }
        out
    }

    /// Iterate the filled cells as (dx, dy) offsets from the matrix's
    /// top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.filled(x, y))
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }
}
