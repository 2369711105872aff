//! Geometry module - spawn shapes and the pivot rotation transform
//!
//! Each kind has a fixed table of four spawn cells with cell 0 as the
//! rotation pivot. Rotation is an integer quarter turn around the pivot
//! and is applied to cells 1..=3 only; the O piece never rotates (its
//! canonical shape is rotation-invariant) and is exempted by the
//! falling-piece controller rather than here.

use crate::types::{PieceKind, Point, Spin, PIECE_CELLS};

/// The four cells of a piece, pivot first
pub type PieceCells = [Point; PIECE_CELLS];

/// Spawn cells for a kind.
///
/// All cells lie inside the playable area (columns 4..=7, rows 0..=1),
/// so a blocked spawn is detectable as a plain overlap.
pub fn spawn_cells(kind: PieceKind) -> PieceCells {
    match kind {
        PieceKind::I => [
            Point::new(5, 0),
            Point::new(4, 0),
            Point::new(6, 0),
            Point::new(7, 0),
        ],
        PieceKind::O => [
            Point::new(5, 1),
            Point::new(6, 1),
            Point::new(5, 0),
            Point::new(6, 0),
        ],
        PieceKind::T => [
            Point::new(6, 1),
            Point::new(5, 1),
            Point::new(7, 1),
            Point::new(6, 0),
        ],
        PieceKind::J => [
            Point::new(6, 1),
            Point::new(5, 1),
            Point::new(7, 1),
            Point::new(5, 0),
        ],
        PieceKind::L => [
            Point::new(6, 1),
            Point::new(5, 1),
            Point::new(7, 1),
            Point::new(7, 0),
        ],
        PieceKind::S => [
            Point::new(6, 1),
            Point::new(5, 1),
            Point::new(6, 0),
            Point::new(7, 0),
        ],
        PieceKind::Z => [
            Point::new(6, 1),
            Point::new(7, 1),
            Point::new(6, 0),
            Point::new(5, 0),
        ],
    }
}

/// Rotate a point a quarter turn around an origin.
///
/// Clockwise maps a relative offset (dx, dy) to (-dy, dx), the
/// counterclockwise turn maps it to (dy, -dx). Four applications of
/// either direction are the identity.
pub fn rotate_point(point: Point, origin: Point, spin: Spin) -> Point {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    let (rx, ry) = match spin {
        Spin::Clockwise => (-dy, dx),
        Spin::Counterclockwise => (dy, -dx),
    };
    Point::new(origin.x + rx, origin.y + ry)
}
