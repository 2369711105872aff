//! Game session - the top-level state machine
//!
//! One session object owns every mutable part of a game: grid, falling
//! piece, preview and held kinds, score, speed, counters, and phase.
//! The external driver calls [`GameSession::step`] once per fixed
//! interval with that step's batch of distinct commands; everything
//! inside a step is synchronous.

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::core::piece::FallingPiece;
use crate::core::rng::ChanceBag;
use crate::core::scoring::{line_clear_points, speed_for_score, INITIAL_SPEED};
use crate::core::snapshot::Snapshot;
use crate::types::{
    Cell, Command, Direction, Phase, PieceKind, Spin, FIELD_HEIGHT, FIELD_WIDTH,
    SETTLE_GRACE_STEPS,
};

/// Fixed dispatch priority. Commands issued within one step are applied
/// in this order regardless of arrival order, so simultaneous presses
/// resolve deterministically.
const DISPATCH_ORDER: [Command; 10] = [
    Command::Quit,
    Command::RotateCcw,
    Command::RotateCw,
    Command::HardDrop,
    Command::MoveLeft,
    Command::MoveRight,
    Command::SoftDrop,
    Command::Pause,
    Command::NewGame,
    Command::Hold,
];

/// One step's worth of commands, deduplicated on insert
#[derive(Debug, Clone, Default)]
pub struct CommandBatch {
    commands: ArrayVec<Command, 10>,
}

impl CommandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command; duplicates within the batch collapse to one
    pub fn push(&mut self, command: Command) {
        if !self.commands.contains(&command) {
            self.commands.push(command);
        }
    }

    pub fn contains(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// What the driver should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSignal {
    Continue,
    /// A quit command was issued; the host process should terminate
    Exit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    piece: FallingPiece,
    next_kind: PieceKind,
    held_kind: Option<PieceKind>,
    score: u32,
    speed: u32,
    phase: Phase,
    bag: ChanceBag,
    /// Steps taken since the last lock or hold; gravity fires on every
    /// multiple of `speed`
    gravity_steps: u32,
    /// Steps of settling left before a failed descent may lock
    settle_grace: u8,
    hold_used: bool,
}

impl GameSession {
    /// Create a session with borders seeded and the first current and
    /// preview pieces spawned; the game is immediately running
    pub fn new(seed: u32) -> Self {
        let mut bag = ChanceBag::new(seed);
        let grid = Grid::new();
        let first = bag.draw();
        let next_kind = bag.draw();
        let piece = FallingPiece::spawn(first, &grid);

        Self {
            grid,
            piece,
            next_kind,
            held_kind: None,
            score: 0,
            speed: INITIAL_SPEED,
            phase: Phase::Running,
            bag,
            gravity_steps: 0,
            settle_grace: 0,
            hold_used: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn held_kind(&self) -> Option<PieceKind> {
        self.held_kind
    }

    pub fn piece(&self) -> &FallingPiece {
        &self.piece
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario seeding in tests and harnesses;
    /// gameplay never needs it
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Advance one step: apply the command batch in dispatch priority
    /// order, then gravity
    pub fn step(&mut self, commands: &CommandBatch) -> StepSignal {
        for command in DISPATCH_ORDER {
            if !commands.contains(command) {
                continue;
            }
            if command == Command::Quit {
                return StepSignal::Exit;
            }
            self.apply(command);
        }

        self.advance_gravity();
        StepSignal::Continue
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Pause => self.toggle_pause(),
            Command::NewGame => self.new_game(),
            // Everything else only acts on a running game
            _ if self.phase != Phase::Running => {}
            Command::MoveLeft => self.shift_piece(Direction::Left),
            Command::MoveRight => self.shift_piece(Direction::Right),
            Command::SoftDrop => self.shift_piece(Direction::Down),
            Command::HardDrop => self.hard_drop(),
            Command::RotateCw => self.rotate_piece(Spin::Clockwise),
            Command::RotateCcw => self.rotate_piece(Spin::Counterclockwise),
            Command::Hold => self.hold(),
            // Quit never reaches apply; step intercepts it
            Command::Quit => {}
        }
    }

    fn shift_piece(&mut self, dir: Direction) {
        if self.piece.shift(&self.grid, dir) {
            self.settle_grace = SETTLE_GRACE_STEPS;
        }
    }

    fn rotate_piece(&mut self, spin: Spin) {
        if self.piece.rotate(&self.grid, spin) {
            self.settle_grace = SETTLE_GRACE_STEPS;
        }
    }

    fn hard_drop(&mut self) {
        self.piece.drop_to_floor(&self.grid);
        self.lock_piece();
    }

    fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => Phase::GameOver,
        };
    }

    /// Swap the active piece with the stored one, at most once between
    /// locks. An empty store draws a fresh kind instead.
    fn hold(&mut self) {
        if self.hold_used {
            return;
        }

        let active = self.piece.kind();
        let swapped_in = match self.held_kind.take() {
            Some(held) => held,
            None => self.bag.draw(),
        };
        self.held_kind = Some(active);
        self.hold_used = true;
        self.gravity_steps = 0;

        self.piece = FallingPiece::spawn(swapped_in, &self.grid);
        if self.piece.overlaps(&self.grid) {
            self.phase = Phase::GameOver;
        }
    }

    /// Gravity: on every multiple of the speed divisor, descend one
    /// row; a failed descent locks the piece once the settle grace has
    /// run out
    fn advance_gravity(&mut self) {
        if self.phase == Phase::Running && self.gravity_steps % self.speed == 0 {
            if self.piece.shift(&self.grid, Direction::Down) {
                self.settle_grace = SETTLE_GRACE_STEPS;
            } else if self.settle_grace == 0 {
                self.lock_piece();
            }
        }

        self.settle_grace = self.settle_grace.saturating_sub(1);
        self.gravity_steps = self.gravity_steps.wrapping_add(1);
    }

    /// Stamp the piece into the grid, clear full rows, score, and bring
    /// in the next piece
    pub fn lock_piece(&mut self) {
        let kind = self.piece.kind();
        for cell in self.piece.cells() {
            self.grid.set(cell.x, cell.y, Cell::Locked(kind));
        }
        self.hold_used = false;
        self.gravity_steps = 0;

        let cleared = self.grid.compact_full_rows();
        if !cleared.is_empty() {
            self.score += line_clear_points(cleared.len());
            self.speed = speed_for_score(self.score);
        }

        self.spawn_next();
    }

    /// Promote the preview to the active piece and draw a new preview.
    ///
    /// A blocked spawn ends the session; the overlapping piece stays
    /// visible and the score is left as it was.
    pub fn spawn_next(&mut self) {
        let kind = self.next_kind;
        self.next_kind = self.bag.draw();

        self.piece = FallingPiece::spawn(kind, &self.grid);
        if self.piece.overlaps(&self.grid) {
            self.phase = Phase::GameOver;
        }
    }

    /// Reset grid, score, speed, randomizer weights, and hold state,
    /// then spawn a fresh current and preview pair. The RNG stream
    /// continues across games.
    pub fn new_game(&mut self) {
        self.grid.reset();
        self.bag.reset_weights();
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.phase = Phase::Running;
        self.held_kind = None;
        self.hold_used = false;
        self.gravity_steps = 0;
        self.settle_grace = 0;

        let first = self.bag.draw();
        self.next_kind = self.bag.draw();
        self.piece = FallingPiece::spawn(first, &self.grid);
    }

    /// Capture a render snapshot
    pub fn snapshot(&self) -> Snapshot {
        let mut cells = [[Cell::Empty; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        self.grid.write_cells(&mut cells);

        Snapshot {
            cells,
            piece_kind: self.piece.kind(),
            piece_cells: *self.piece.cells(),
            shadow_cells: *self.piece.shadow(),
            next_kind: self.next_kind,
            held_kind: self.held_kind,
            score: self.score,
            speed: self.speed,
            phase: self.phase,
        }
    }

    /// Refresh a caller-owned snapshot without allocating
    pub fn write_snapshot(&self, out: &mut Snapshot) {
        self.grid.write_cells(&mut out.cells);
        out.piece_kind = self.piece.kind();
        out.piece_cells = *self.piece.cells();
        out.shadow_cells = *self.piece.shadow();
        out.next_kind = self.next_kind;
        out.held_kind = self.held_kind;
        out.score = self.score;
        out.speed = self.speed;
        out.phase = self.phase;
    }
}
