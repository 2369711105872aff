//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use thiserror::Error;

/// Field dimensions, border included
pub const FIELD_WIDTH: i8 = 12;
pub const FIELD_HEIGHT: i8 = 22;

/// Cells per piece
pub const PIECE_CELLS: usize = 4;

/// Driver step cadence (milliseconds)
pub const STEP_MS: u64 = 50;

/// Steps a piece keeps settling after a successful move or rotation
/// before a failed descent is allowed to lock it
pub const SETTLE_GRACE_STEPS: u8 = 15;

/// A grid coordinate, x growing right and y growing down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The point shifted by (dx, dy)
    pub const fn translated(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in the fixed draw order used by the randomizer
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position of this kind within [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// One cell of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Indestructible wall or floor marker
    Border,
    Locked(PieceKind),
}

impl Cell {
    /// True for anything a piece cannot pass through
    pub fn is_filled(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// Axis-aligned single-step movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// Translation vector (dx, dy)
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// Quarter-turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    Counterclockwise,
}

/// Discrete input commands accepted by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Hold,
    Pause,
    NewGame,
    Quit,
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Host-integration misuse of the piece API.
///
/// Gameplay itself never produces these; boundary conditions inside the
/// rules are handled in-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("a piece needs exactly {PIECE_CELLS} cells, got {0}")]
    CellCount(usize),
    #[error("piece cells must be distinct")]
    OverlappingCells,
}
