use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{ChanceBag, CommandBatch, GameSession, Grid};
use blockfall::types::{Cell, Command, PieceKind};

fn bench_step(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    let empty = CommandBatch::new();

    c.bench_function("session_step_idle", |b| {
        b.iter(|| {
            session.step(black_box(&empty));
        })
    });
}

fn bench_step_with_commands(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    let mut commands = CommandBatch::new();
    commands.push(Command::MoveLeft);
    commands.push(Command::RotateCw);

    c.bench_function("session_step_move_rotate", |b| {
        b.iter(|| {
            session.step(black_box(&commands));
        })
    });
}

fn bench_compact_four_rows(c: &mut Criterion) {
    c.bench_function("compact_four_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 17..21 {
                for x in 1..11 {
                    grid.set(x, y, Cell::Locked(PieceKind::I));
                }
            }
            grid.compact_full_rows()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let mut snapshot = session.snapshot();

    c.bench_function("write_snapshot", |b| {
        b.iter(|| {
            session.write_snapshot(black_box(&mut snapshot));
        })
    });
}

fn bench_randomizer(c: &mut Criterion) {
    let mut bag = ChanceBag::new(12345);

    c.bench_function("chance_bag_draw", |b| {
        b.iter(|| black_box(bag.draw()))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_step_with_commands,
    bench_compact_four_rows,
    bench_snapshot,
    bench_randomizer
);
criterion_main!(benches);
