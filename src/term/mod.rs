//! Terminal adapter - renders session snapshots with crossterm.
//!
//! Nothing in here feeds back into the rules; the view only reads
//! snapshots.

pub mod screen;
pub mod view;

pub use screen::Screen;
pub use view::GameView;
