//! Rules Engine Benchmarks
//!
//! Performance benchmarks for the hot paths using Criterion.

use chess_rules::{perft, Board, Color, EngineSettings, Move, Perft, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_starting_position(c: &mut Criterion) {
    c.bench_function("starting_position", |b| {
        b.iter(|| black_box(Board::starting_position()))
    });
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let mut board = Board::starting_position();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(board.legal_moves(Color::White)))
    });
}

fn bench_recompute_attacks(c: &mut Criterion) {
    let mut board = Board::starting_position();

    c.bench_function("recompute_attacks", |b| {
        b.iter(|| {
            board.recompute_attacks();
            black_box(&board);
        })
    });
}

fn bench_apply_rollback(c: &mut Criterion) {
    let mut board = Board::starting_position();
    let mv = Move::quiet(Square::new(1, 4), Square::new(3, 4));

    c.bench_function("apply_rollback_e2e4", |b| {
        b.iter(|| {
            let trial = board.apply(black_box(mv));
            black_box(trial.is_ok());
        })
    });
}

fn bench_perft_depth_3(c: &mut Criterion) {
    let mut board = Board::starting_position();
    let unchecked = Perft::new(EngineSettings {
        verify_rollback: false,
        ..EngineSettings::default()
    });

    let mut group = c.benchmark_group("perft_depth_3");
    group.sample_size(10);
    group.bench_function("verified", |b| {
        b.iter(|| black_box(perft(&mut board, 3, Color::White)))
    });
    group.bench_function("unverified", |b| {
        b.iter(|| black_box(unchecked.count(&mut board, 3, Color::White)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_starting_position,
    bench_legal_moves_starting,
    bench_recompute_attacks,
    bench_apply_rollback,
    bench_perft_depth_3,
);
criterion_main!(benches);
