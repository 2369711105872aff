//! Terminal runner (default binary).
//!
//! Drives the session at a fixed 50 ms step: drain pending key events
//! into a deduplicated command batch, advance the session one step,
//! render the snapshot.

use std::time::{Duration, Instant, SystemTime};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{CommandBatch, GameSession, StepSignal};
use blockfall::input::map_key;
use blockfall::term::{GameView, Screen};
use blockfall::types::STEP_MS;

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut session = GameSession::new(wall_clock_seed());
    let mut view = GameView::new();
    let mut snapshot = session.snapshot();
    let mut commands = CommandBatch::new();
    let step = Duration::from_millis(STEP_MS);

    loop {
        view.draw(screen, &snapshot)?;

        // Collect this step's input until the step deadline
        commands.clear();
        let deadline = Instant::now() + step;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = map_key(key) {
                        commands.push(command);
                    }
                }
                Event::Resize(_, _) => view.invalidate(),
                _ => {}
            }
        }

        if session.step(&commands) == StepSignal::Exit {
            return Ok(());
        }
        session.write_snapshot(&mut snapshot);
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
