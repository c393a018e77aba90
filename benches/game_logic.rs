use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{collides, ActivePiece, Board, Game};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new();
    let piece = ActivePiece::spawn(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&piece), black_box(&board)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            // Alternate so the piece never leaves the board.
            game.try_move(1, 0);
            game.try_move(-1, 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| game.rotate())
    });
}

fn bench_drop_to_lock(c: &mut Criterion) {
    c.bench_function("soft_drop_full_column", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(7));
            // Drop one piece all the way to its lock.
            for _ in 0..21 {
                game.soft_drop();
            }
            game.score()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_full_rows,
    bench_collides,
    bench_try_move,
    bench_rotate,
    bench_drop_to_lock
);
criterion_main!(benches);
