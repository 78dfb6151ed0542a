//! Board module - manages the game grid
//!
//! The board is a grid of cells sized at construction (typically 10x20),
//! stored as a flat row-major array for cache locality. Coordinates: (x, y)
//! where x grows left to right and y grows top to bottom. All indexing goes
//! through a single bounds check, so nothing here can read or write past the
//! grid.

use arrayvec::ArrayVec;

use crate::core::shape::{Shape, MAX_SHAPE_DIM};
use crate::types::{Cell, PieceKind};

/// Largest board extent along either axis. Grid coordinates are `i8`, so
/// every cell must be addressable as a non-negative `i8`.
pub const MAX_BOARD_DIM: u8 = i8::MAX as u8;

/// The playfield grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Dimensions are fixed for the board's
    /// lifetime, must fit the largest shape matrix, and must stay within
    /// the `i8` coordinate range.
    pub fn new(cols: u8, rows: u8) -> Self {
        assert!(
            cols >= MAX_SHAPE_DIM && rows >= MAX_SHAPE_DIM,
            "board must be at least {0}x{0}",
            MAX_SHAPE_DIM
        );
        assert!(
            cols <= MAX_BOARD_DIM && rows <= MAX_BOARD_DIM,
            "board must be at most {0}x{0}",
            MAX_BOARD_DIM
        );
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Calculate flat index from (x, y), or None when out of bounds
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.cols as i8 || y < 0 || y >= self.rows as i8 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Get cell at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty.
    ///
    /// This is the collision primitive: every movement, rotation, drop and
    /// spawn check reduces to calls of this predicate, and out-of-bounds is
    /// always treated as a collision.
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a shape placed with its top-left corner at (x, y) fits
    /// without overlapping filled cells or leaving the grid.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().all(|(dx, dy)| self.is_valid(x + dx, y + dy))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        let start = y * self.cols as usize;
        let end = start + self.cols as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Merge a shape's filled cells into the grid.
    ///
    /// Panics if any target cell is out of bounds or already occupied; the
    /// caller must have verified the position with [`fits`](Self::fits).
    /// Reaching the panic means the collision guard was bypassed, which is a
    /// bug in the engine, not a runtime condition.
    pub fn lock_cells(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.cells() {
            let (px, py) = (x + dx, y + dy);
            let idx = match self.index(px, py) {
                Some(idx) => idx,
                None => panic!("lock target ({px}, {py}) out of bounds"),
            };
            assert!(
                self.cells[idx].is_none(),
                "lock target ({px}, {py}) already occupied"
            );
            self.cells[idx] = Some(kind);
        }
    }

    /// Clear all full rows and return their indices, bottom to top.
    ///
    /// Rows above each cleared row shift down by one and an equal number of
    /// empty rows appears at the top, so the grid's row count never changes.
    /// Single bottom-up pass with a write cursor; no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, { MAX_SHAPE_DIM as usize }> {
        let mut cleared = ArrayVec::new();
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;

        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Everything above the write cursor becomes empty.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
