use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ataxx_engine::agent::ai::choose_move_at_depth;
use ataxx_engine::game_repr::{Board, PieceColor};

fn midgame_position() -> Board {
    let mut board = Board::new();
    for text in ["a7-b6", "a1-b2", "b6-b4", "g7-f6", "g1-f2", "f6-d6"] {
        board.make_move(text.parse().unwrap()).unwrap();
    }
    board
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = midgame_position();
    c.bench_function("legal_moves midgame", |b| {
        b.iter(|| black_box(&board).legal_moves(PieceColor::Red))
    });
}

fn bench_search(c: &mut Criterion) {
    let board = midgame_position();
    for depth in [2, 3] {
        c.bench_function(&format!("choose_move depth {}", depth), |b| {
            b.iter(|| choose_move_at_depth(PieceColor::Red, black_box(&board), depth))
        });
    }
}

criterion_group!(benches, bench_legal_moves, bench_search);
criterion_main!(benches);
