//! View: draws a session snapshot onto the screen.
//!
//! Keeps the previously drawn snapshot and repaints the field only when
//! field content changed, and each side panel only when its value
//! changed.

use anyhow::Result;
use crossterm::style::Color;

use crate::core::geometry::spawn_cells;
use crate::core::scoring::SPEED_TIERS;
use crate::core::snapshot::Snapshot;
use crate::term::screen::Screen;
use crate::types::{Cell, Phase, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal column of the field's left edge
const FIELD_X: u16 = 2;
/// Terminal row of the field's top edge
const FIELD_Y: u16 = 1;
/// Terminal columns per field cell
const CELL_W: u16 = 2;
/// Column where the side panels start
const PANEL_X: u16 = FIELD_X + (FIELD_WIDTH as u16) * CELL_W + 3;

const BG: Color = Color::Black;

pub struct GameView {
    last: Option<Snapshot>,
}

impl GameView {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Draw what changed since the previous frame and flush
    pub fn draw(&mut self, screen: &mut Screen, snap: &Snapshot) -> Result<()> {
        let full = self.last.is_none();
        if full {
            screen.clear_all()?;
            draw_labels(screen)?;
        }
        let last = self.last.as_ref();

        if full || last.is_some_and(|l| snap.field_differs(l)) {
            draw_field(screen, snap)?;
        }
        if full || last.is_some_and(|l| l.score != snap.score) {
            draw_score(screen, snap.score)?;
        }
        if full || last.is_some_and(|l| l.speed != snap.speed) {
            draw_speed_bar(screen, snap.speed)?;
        }
        if full || last.is_some_and(|l| l.next_kind != snap.next_kind) {
            draw_piece_panel(screen, FIELD_Y + 8, Some(snap.next_kind))?;
        }
        if full || last.is_some_and(|l| l.held_kind != snap.held_kind) {
            draw_piece_panel(screen, FIELD_Y + 13, snap.held_kind)?;
        }

        screen.flush()?;
        self.last = Some(snap.clone());
        Ok(())
    }

    /// Drop the cached frame so the next draw repaints everything
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_labels(screen: &mut Screen) -> Result<()> {
    let label = Color::White;
    screen.put(PANEL_X, FIELD_Y + 1, "SCORE", label, BG)?;
    screen.put(PANEL_X, FIELD_Y + 4, "SPEED", label, BG)?;
    screen.put(PANEL_X, FIELD_Y + 7, "NEXT", label, BG)?;
    screen.put(PANEL_X, FIELD_Y + 12, "STORED", label, BG)?;
    screen.put(
        FIELD_X,
        FIELD_Y + FIELD_HEIGHT as u16 + 1,
        "arrows move/drop  x/z rotate  space store  p pause  g new  q quit",
        Color::DarkGrey,
        BG,
    )?;
    Ok(())
}

fn draw_field(screen: &mut Screen, snap: &Snapshot) -> Result<()> {
    for y in 0..FIELD_HEIGHT {
        for x in 0..FIELD_WIDTH {
            let (text, fg) = match snap.cells[y as usize][x as usize] {
                Cell::Empty => (" ·", Color::DarkGrey),
                Cell::Border => ("██", Color::Grey),
                Cell::Locked(kind) => ("██", piece_color(kind)),
            };
            put_cell(screen, x, y, text, fg)?;
        }
    }

    // Shadow first so the live piece paints over any overlap
    for cell in &snap.shadow_cells {
        put_cell(screen, cell.x, cell.y, "░░", Color::DarkGrey)?;
    }
    for cell in &snap.piece_cells {
        put_cell(screen, cell.x, cell.y, "██", piece_color(snap.piece_kind))?;
    }

    match snap.phase {
        Phase::GameOver => screen.put(FIELD_X + 7, FIELD_Y, "GAME OVER", Color::Red, BG)?,
        Phase::Paused => screen.put(FIELD_X + 9, FIELD_Y, "PAUSED", Color::Yellow, BG)?,
        Phase::Running => {}
    }
    Ok(())
}

fn put_cell(screen: &mut Screen, x: i8, y: i8, text: &str, fg: Color) -> Result<()> {
    if x < 0 || y < 0 {
        return Ok(());
    }
    screen.put(
        FIELD_X + (x as u16) * CELL_W,
        FIELD_Y + y as u16,
        text,
        fg,
        BG,
    )
}

fn draw_score(screen: &mut Screen, score: u32) -> Result<()> {
    screen.put(PANEL_X, FIELD_Y + 2, &format!("{score:6}"), Color::White, BG)
}

/// One block per speed tier reached, like a gear indicator
fn draw_speed_bar(screen: &mut Screen, speed: u32) -> Result<()> {
    let mut bar = String::new();
    for (_, tier_speed) in SPEED_TIERS {
        if speed <= tier_speed {
            bar.push('■');
            bar.push(' ');
        } else {
            break;
        }
    }
    screen.put(PANEL_X, FIELD_Y + 5, &format!("{bar:<12}"), Color::Red, BG)
}

/// Draw a piece's spawn silhouette inside a side panel, or clear the
/// panel when there is no piece to show
fn draw_piece_panel(screen: &mut Screen, top: u16, kind: Option<PieceKind>) -> Result<()> {
    for row in 0..2 {
        screen.put(PANEL_X, top + row, "        ", Color::White, BG)?;
    }

    let Some(kind) = kind else {
        return Ok(());
    };
    for cell in spawn_cells(kind) {
        // Spawn cells sit on columns 4..=7 and rows 0..=1
        let px = PANEL_X + ((cell.x - 4) as u16) * CELL_W;
        let py = top + cell.y as u16;
        screen.put(px, py, "██", piece_color(kind), BG)?;
    }
    Ok(())
}

fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::White,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
    }
}
