//! Grid module - manages the bounded play field
//!
//! The field is a 12x22 cell matrix stored as a flat row-major array.
//! The bottom row and the outermost columns are `Cell::Border` and are
//! never cleared or overwritten by gameplay; everything inside them is
//! the playable area. Coordinates: (x, y) with x ranging 0..11 (left to
//! right) and y ranging 0..21 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH, PIECE_CELLS};

/// Total number of cells on the field
const GRID_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The play field, border cells included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a field that is empty apart from the border
    pub fn new() -> Self {
        let mut grid = Self {
            cells: [Cell::Empty; GRID_SIZE],
        };
        grid.seed_border();
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH || y < 0 || y >= FIELD_HEIGHT {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> i8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y); `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// The single collision oracle: true for any out-of-bounds
    /// coordinate and for any non-empty cell
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].is_filled(),
            None => true,
        }
    }

    /// Store a cell value; silently ignores out-of-bounds coordinates
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Reset to the empty-plus-border state of a fresh session
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; GRID_SIZE];
        self.seed_border();
    }

    fn seed_border(&mut self) {
        for x in 0..FIELD_WIDTH {
            self.set(x, FIELD_HEIGHT - 1, Cell::Border);
        }
        for y in 0..FIELD_HEIGHT {
            self.set(0, y, Cell::Border);
            self.set(FIELD_WIDTH - 1, y, Cell::Border);
        }
    }

    /// Check if a playable row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        if y <= 0 || y >= FIELD_HEIGHT - 1 {
            return false;
        }
        (1..FIELD_WIDTH - 1).all(|x| self.is_filled(x, y))
    }

    /// Copy every cell into a caller-owned 2-D array (row-major),
    /// for snapshotting without allocation
    pub fn write_cells(
        &self,
        out: &mut [[Cell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    ) {
        for y in 0..FIELD_HEIGHT as usize {
            let start = y * FIELD_WIDTH as usize;
            out[y].copy_from_slice(&self.cells[start..start + FIELD_WIDTH as usize]);
        }
    }

    /// Remove every full playable row, shifting the rows above down.
    ///
    /// Scans bottom to top; after a row is removed the same index is
    /// re-tested, since content has shifted down into it. Returns the
    /// removed row indices in scan order. At most four rows can complete
    /// from a single lock.
    pub fn compact_full_rows(&mut self) -> ArrayVec<i8, PIECE_CELLS> {
        let mut removed = ArrayVec::new();

        let mut y = FIELD_HEIGHT - 2;
        while y > 0 {
            if !self.is_row_full(y) {
                y -= 1;
                continue;
            }

            removed.push(y);
            for yy in (1..=y).rev() {
                for x in 1..FIELD_WIDTH - 1 {
                    let above = self.get(x, yy - 1).unwrap_or(Cell::Empty);
                    self.set(x, yy, above);
                }
            }
            for x in 1..FIELD_WIDTH - 1 {
                self.set(x, 0, Cell::Empty);
            }
            // y is re-tested on the next pass of the loop
        }

        removed
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
