//! Read-only render snapshot of a session.
//!
//! The snapshot is plain data with no back-references into the session,
//! so a renderer can keep one from the previous frame and repaint only
//! the panels whose backing value changed.

use crate::core::geometry::PieceCells;
use crate::types::{Cell, Phase, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Everything a renderer needs, captured at one step boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// All field cells, border included, indexed `[y][x]`
    pub cells: [[Cell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub piece_kind: PieceKind,
    pub piece_cells: PieceCells,
    pub shadow_cells: PieceCells,
    pub next_kind: PieceKind,
    pub held_kind: Option<PieceKind>,
    pub score: u32,
    pub speed: u32,
    pub phase: Phase,
}

impl Snapshot {
    /// Whether the parts drawn inside the field frame differ, which is
    /// what decides a field repaint
    pub fn field_differs(&self, other: &Snapshot) -> bool {
        self.cells != other.cells
            || self.piece_cells != other.piece_cells
            || self.piece_kind != other.piece_kind
            || self.shadow_cells != other.shadow_cells
            || self.phase != other.phase
    }
}
