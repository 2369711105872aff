//! Falling-piece controller
//!
//! Owns the active piece's four cells (pivot first) and the derived
//! shadow cells. Every collision question goes through
//! [`Grid::is_filled`]; a piece never inspects grid storage directly.

use crate::core::geometry::{rotate_point, spawn_cells, PieceCells};
use crate::core::grid::Grid;
use crate::types::{Direction, InvalidState, PieceKind, Point, Spin};

/// Offsets tried in order when a plain rotation collides: in place,
/// one left, one right, one up. The first offset where the piece both
/// fits and can rotate wins; if none does the piece is left unmoved.
const KICK_OFFSETS: [(i8, i8); 4] = [(0, 0), (-1, 0), (1, 0), (0, -1)];

/// The active piece: kind, live cells, and shadow projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingPiece {
    kind: PieceKind,
    /// Live cells, cell 0 being the rotation pivot
    cells: PieceCells,
    /// Where the live cells would rest after a straight drop
    shadow: PieceCells,
}

impl FallingPiece {
    /// Place a fresh piece at its spawn cells.
    ///
    /// Spawn does not validate overlap; the session checks
    /// [`FallingPiece::overlaps`] afterwards to detect game over.
    pub fn spawn(kind: PieceKind, grid: &Grid) -> Self {
        let cells = spawn_cells(kind);
        let mut piece = Self {
            kind,
            cells,
            shadow: cells,
        };
        piece.update_shadow(grid);
        piece
    }

    /// Build a piece from explicit cells (cell 0 is the pivot).
    ///
    /// Rejects anything other than exactly four distinct cells; such a
    /// slice indicates a host-integration bug, not a game condition.
    pub fn from_cells(
        kind: PieceKind,
        cells: &[Point],
        grid: &Grid,
    ) -> Result<Self, InvalidState> {
        let cells: PieceCells = cells
            .try_into()
            .map_err(|_| InvalidState::CellCount(cells.len()))?;
        for (i, a) in cells.iter().enumerate() {
            if cells[i + 1..].contains(a) {
                return Err(InvalidState::OverlappingCells);
            }
        }

        let mut piece = Self {
            kind,
            cells,
            shadow: cells,
        };
        piece.update_shadow(grid);
        Ok(piece)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    pub fn shadow(&self) -> &PieceCells {
        &self.shadow
    }

    /// True when any live cell sits on a filled grid cell
    pub fn overlaps(&self, grid: &Grid) -> bool {
        self.cells.iter().any(|c| grid.is_filled(c.x, c.y))
    }

    /// Whether all four cells could take one step in `dir`
    pub fn can_shift(&self, grid: &Grid, dir: Direction) -> bool {
        let (dx, dy) = dir.offset();
        self.cells
            .iter()
            .all(|c| !grid.is_filled(c.x + dx, c.y + dy))
    }

    /// Take one step in `dir` if legal; reports whether anything moved
    pub fn shift(&mut self, grid: &Grid, dir: Direction) -> bool {
        if !self.can_shift(grid, dir) {
            return false;
        }

        let (dx, dy) = dir.offset();
        for cell in &mut self.cells {
            *cell = cell.translated(dx, dy);
        }
        if matches!(dir, Direction::Left | Direction::Right) {
            self.update_shadow(grid);
        }
        true
    }

    /// Descend as far as possible; returns the rows fallen.
    ///
    /// The caller locks immediately afterwards, there is no settle grace
    /// after a hard drop.
    pub fn drop_to_floor(&mut self, grid: &Grid) -> u32 {
        let mut fallen = 0;
        while self.shift(grid, Direction::Down) {
            fallen += 1;
        }
        fallen
    }

    /// Quarter-turn about the pivot, trying each kick offset in order.
    ///
    /// The O piece is rotation-invariant and never rotates. A non-zero
    /// kick requires the un-rotated piece to fit at the kicked position,
    /// then the rotation to be collision-free there.
    pub fn rotate(&mut self, grid: &Grid, spin: Spin) -> bool {
        if self.kind == PieceKind::O {
            return false;
        }

        for (dx, dy) in KICK_OFFSETS {
            let is_kick = dx != 0 || dy != 0;
            if is_kick && !self.fits_translated(grid, dx, dy) {
                continue;
            }
            if self.rotation_fits(grid, dx, dy, spin) {
                self.apply_rotation(grid, dx, dy, spin);
                return true;
            }
        }

        false
    }

    fn fits_translated(&self, grid: &Grid, dx: i8, dy: i8) -> bool {
        self.cells
            .iter()
            .all(|c| !grid.is_filled(c.x + dx, c.y + dy))
    }

    /// Whether cells 1..=3, rotated about the kicked pivot, land on
    /// free cells (the pivot itself does not move)
    fn rotation_fits(&self, grid: &Grid, dx: i8, dy: i8, spin: Spin) -> bool {
        let pivot = self.cells[0].translated(dx, dy);
        self.cells[1..].iter().all(|c| {
            let p = rotate_point(c.translated(dx, dy), pivot, spin);
            !grid.is_filled(p.x, p.y)
        })
    }

    fn apply_rotation(&mut self, grid: &Grid, dx: i8, dy: i8, spin: Spin) {
        let pivot = self.cells[0].translated(dx, dy);
        self.cells[0] = pivot;
        for cell in &mut self.cells[1..] {
            *cell = rotate_point(cell.translated(dx, dy), pivot, spin);
        }
        self.update_shadow(grid);
    }

    /// Project the live cells straight down to their resting position
    fn update_shadow(&mut self, grid: &Grid) {
        self.shadow = self.cells;
        loop {
            let can_fall = self
                .shadow
                .iter()
                .all(|c| !grid.is_filled(c.x, c.y + 1));
            if !can_fall {
                return;
            }
            for cell in &mut self.shadow {
                cell.y += 1;
            }
        }
    }
}
