//! End-to-end session behavior: command dispatch, locking, scoring,
//! hold, and the game-over transition

use blockfall::core::{CommandBatch, GameSession, StepSignal};
use blockfall::types::{Cell, Command, Phase, PieceKind};

fn batch(commands: &[Command]) -> CommandBatch {
    let mut b = CommandBatch::new();
    for &c in commands {
        b.push(c);
    }
    b
}

#[test]
fn test_same_seed_and_input_replays_identically() {
    let mut a = GameSession::new(777);
    let mut b = GameSession::new(777);

    let script: &[&[Command]] = &[
        &[Command::MoveLeft],
        &[Command::RotateCw],
        &[],
        &[Command::MoveRight, Command::SoftDrop],
        &[Command::HardDrop],
        &[Command::Hold],
        &[],
        &[Command::HardDrop],
    ];
    for commands in script {
        a.step(&batch(commands));
        b.step(&batch(commands));
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_double_hold_is_inert() {
    let mut session = GameSession::new(31);
    session.step(&batch(&[Command::Hold]));

    let after_first = session.snapshot();
    session.step(&batch(&[Command::Hold]));
    let after_second = session.snapshot();

    // The second hold did nothing; only gravity state may differ, and
    // with a fresh gravity counter the piece does not move for many
    // steps, so the snapshots match outright.
    assert_eq!(after_first.held_kind, after_second.held_kind);
    assert_eq!(after_first.piece_kind, after_second.piece_kind);
    assert_eq!(after_first.piece_cells, after_second.piece_cells);
}

#[test]
fn test_blocked_spawn_ends_session_and_keeps_score() {
    let mut session = GameSession::new(63);

    // Clog the spawn rows, leaving a gap so neither row can clear
    for y in 0..2 {
        for x in 2..11 {
            session.grid_mut().set(x, y, Cell::Locked(PieceKind::S));
        }
    }

    session.step(&batch(&[Command::HardDrop]));

    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_two_full_rows_score_three_points() {
    let mut session = GameSession::new(15);

    // Rows 5 and 7 are complete; the falling piece rests on top of row
    // 5, locks, and both rows compact out
    for x in 1..11 {
        session.grid_mut().set(x, 5, Cell::Locked(PieceKind::Z));
        session.grid_mut().set(x, 7, Cell::Locked(PieceKind::Z));
    }

    session.step(&batch(&[Command::HardDrop]));

    assert_eq!(session.score(), 3);
    // Neither full row survived
    for y in 0..22 {
        assert!(!session.grid().is_row_full(y));
    }
}

#[test]
fn test_four_rows_score_fifteen_points() {
    let mut session = GameSession::new(15);
    for y in 17..21 {
        for x in 1..11 {
            session.grid_mut().set(x, y, Cell::Locked(PieceKind::J));
        }
    }

    session.step(&batch(&[Command::HardDrop]));
    assert_eq!(session.score(), 15);
}

#[test]
fn test_pause_is_a_toggle_and_blocks_play() {
    let mut session = GameSession::new(8);

    session.step(&batch(&[Command::Pause]));
    assert_eq!(session.phase(), Phase::Paused);

    let frozen = session.snapshot();
    for _ in 0..100 {
        session.step(&batch(&[Command::MoveLeft, Command::HardDrop]));
    }
    let still = session.snapshot();
    assert_eq!(frozen, still);

    session.step(&batch(&[Command::Pause]));
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_new_game_works_while_paused() {
    let mut session = GameSession::new(8);
    session.step(&batch(&[Command::Pause]));
    session.step(&batch(&[Command::NewGame]));
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_quit_exits_from_any_phase() {
    let mut running = GameSession::new(1);
    assert_eq!(running.step(&batch(&[Command::Quit])), StepSignal::Exit);

    let mut paused = GameSession::new(1);
    paused.step(&batch(&[Command::Pause]));
    assert_eq!(paused.step(&batch(&[Command::Quit])), StepSignal::Exit);
}

#[test]
fn test_new_game_recovers_from_game_over() {
    let mut session = GameSession::new(63);
    for y in 0..2 {
        for x in 2..11 {
            session.grid_mut().set(x, y, Cell::Locked(PieceKind::S));
        }
    }
    session.step(&batch(&[Command::HardDrop]));
    assert_eq!(session.phase(), Phase::GameOver);

    session.step(&batch(&[Command::NewGame]));
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.score(), 0);

    // The board is playable again
    let snap = session.snapshot();
    for cell in &snap.piece_cells {
        assert!(!session.grid().is_filled(cell.x, cell.y));
    }
}

#[test]
fn test_preview_becomes_active_on_lock() {
    let mut session = GameSession::new(44);
    let preview = session.next_kind();

    session.step(&batch(&[Command::HardDrop]));

    assert_eq!(session.piece().kind(), preview);
    assert_ne!(session.snapshot().phase, Phase::GameOver);
}

#[test]
fn test_snapshot_reflects_session_state() {
    let mut session = GameSession::new(90);
    session.step(&batch(&[Command::MoveLeft]));

    let snap = session.snapshot();
    assert_eq!(snap.score, session.score());
    assert_eq!(snap.speed, session.speed());
    assert_eq!(snap.phase, session.phase());
    assert_eq!(snap.piece_kind, session.piece().kind());
    assert_eq!(&snap.piece_cells, session.piece().cells());
    assert_eq!(&snap.shadow_cells, session.piece().shadow());
    assert_eq!(snap.next_kind, session.next_kind());
    assert_eq!(snap.held_kind, session.held_kind());

    // Shadow cells share columns with the live piece
    for (live, ghost) in snap.piece_cells.iter().zip(&snap.shadow_cells) {
        assert_eq!(live.x, ghost.x);
        assert!(ghost.y >= live.y);
    }
}
