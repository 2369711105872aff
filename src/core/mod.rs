//! Core module - pure game rules with no I/O dependencies
//!
//! Everything under here is deterministic given a seed and free of
//! terminal, clock, and input concerns; the adapters in `input` and
//! `term` talk to it through commands and snapshots only.

pub mod geometry;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use grid::Grid;
pub use piece::FallingPiece;
pub use rng::{ChanceBag, SimpleRng};
pub use session::{CommandBatch, GameSession, StepSignal};
pub use snapshot::Snapshot;
