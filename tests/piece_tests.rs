//! Falling-piece behavior through the public API

use blockfall::core::{FallingPiece, Grid};
use blockfall::types::{Cell, Direction, InvalidState, PieceKind, Point, Spin};

fn piece_is_clear(piece: &FallingPiece, grid: &Grid) -> bool {
    piece.cells().iter().all(|c| !grid.is_filled(c.x, c.y))
}

#[test]
fn test_four_clockwise_turns_are_identity() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let mut piece = FallingPiece::spawn(kind, &grid);
        for _ in 0..8 {
            piece.shift(&grid, Direction::Down);
        }
        let before = piece.clone();
        for _ in 0..4 {
            assert!(piece.rotate(&grid, Spin::Clockwise), "{kind:?}");
        }
        assert_eq!(piece, before, "{kind:?}");
    }
}

#[test]
fn test_four_counterclockwise_turns_are_identity() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let mut piece = FallingPiece::spawn(kind, &grid);
        for _ in 0..8 {
            piece.shift(&grid, Direction::Down);
        }
        let before = piece.clone();
        for _ in 0..4 {
            assert!(piece.rotate(&grid, Spin::Counterclockwise), "{kind:?}");
        }
        assert_eq!(piece, before, "{kind:?}");
    }
}

#[test]
fn test_o_rotation_is_always_a_no_op() {
    let grid = Grid::new();
    let mut piece = FallingPiece::spawn(PieceKind::O, &grid);
    for _ in 0..5 {
        piece.shift(&grid, Direction::Down);
    }
    let before = piece.clone();
    assert!(!piece.rotate(&grid, Spin::Clockwise));
    assert!(!piece.rotate(&grid, Spin::Counterclockwise));
    assert_eq!(piece, before);
}

#[test]
fn test_moves_and_rotations_never_leave_overlap() {
    // A cluttered grid: scattered locked cells around the middle
    let mut grid = Grid::new();
    for &(x, y) in &[(3, 8), (8, 9), (2, 12), (9, 12), (5, 15), (6, 18)] {
        grid.set(x, y, Cell::Locked(PieceKind::J));
    }

    for kind in PieceKind::ALL {
        let mut piece = FallingPiece::spawn(kind, &grid);
        let script = [
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Down,
        ];
        for dir in script {
            piece.shift(&grid, dir);
            assert!(piece_is_clear(&piece, &grid), "{kind:?} after {dir:?}");

            piece.rotate(&grid, Spin::Clockwise);
            assert!(piece_is_clear(&piece, &grid), "{kind:?} after rotation");
        }
    }
}

#[test]
fn test_failed_move_has_no_effect() {
    let grid = Grid::new();
    let mut piece = FallingPiece::spawn(PieceKind::I, &grid);
    while piece.shift(&grid, Direction::Left) {}

    let stuck = piece.clone();
    assert!(!piece.shift(&grid, Direction::Left));
    assert_eq!(piece, stuck);
}

#[test]
fn test_hard_drop_rests_on_support() {
    let mut grid = Grid::new();
    for x in 1..7 {
        grid.set(x, 16, Cell::Locked(PieceKind::L));
    }

    for kind in PieceKind::ALL {
        let mut piece = FallingPiece::spawn(kind, &grid);
        piece.drop_to_floor(&grid);

        assert!(!piece.can_shift(&grid, Direction::Down), "{kind:?}");
        assert!(piece_is_clear(&piece, &grid), "{kind:?}");
        // The resting position matches the shadow projection
        assert_eq!(piece.cells(), piece.shadow(), "{kind:?}");
    }
}

#[test]
fn test_shadow_tracks_horizontal_movement() {
    let mut grid = Grid::new();
    // A tower on the left half
    for y in 14..21 {
        grid.set(2, y, Cell::Locked(PieceKind::I));
        grid.set(3, y, Cell::Locked(PieceKind::I));
    }

    let mut piece = FallingPiece::spawn(PieceKind::O, &grid);
    let deep = piece.shadow().iter().map(|c| c.y).max().unwrap();

    // Slide left over the tower: the shadow must rise onto it
    while piece.shift(&grid, Direction::Left) {}
    let on_tower = piece.shadow().iter().map(|c| c.y).max().unwrap();
    assert!(on_tower < deep);
}

#[test]
fn test_from_cells_validates_cell_count() {
    let grid = Grid::new();
    let too_few = [Point::new(2, 2), Point::new(3, 2)];
    assert_eq!(
        FallingPiece::from_cells(PieceKind::L, &too_few, &grid),
        Err(InvalidState::CellCount(2))
    );

    let five = [
        Point::new(2, 2),
        Point::new(3, 2),
        Point::new(4, 2),
        Point::new(5, 2),
        Point::new(6, 2),
    ];
    assert_eq!(
        FallingPiece::from_cells(PieceKind::I, &five, &grid),
        Err(InvalidState::CellCount(5))
    );

    let valid = [
        Point::new(2, 2),
        Point::new(3, 2),
        Point::new(4, 2),
        Point::new(5, 2),
    ];
    assert!(FallingPiece::from_cells(PieceKind::I, &valid, &grid).is_ok());
}
