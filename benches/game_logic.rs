use criterion::{black_box, criterion_group, criterion_main, Criterion};
use block_puzzle::core::{clear_lines, Board, PieceBag};
use block_puzzle::engine::{GameEngine, PlaceRequest};
use block_puzzle::types::{PieceColor, PieceType};

fn bench_try_place(c: &mut Criterion) {
    c.bench_function("try_place_square3", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let _ = board.try_place_piece(black_box(PieceType::Square3), black_box(4), black_box(4));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_cross", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // One full row and one full column
            for i in 0..10 {
                board.set(5, i, Some(PieceColor::Gray));
                board.set(i, 5, Some(PieceColor::Gray));
            }
            clear_lines(&mut board);
        })
    });
}

fn bench_can_place_anywhere(c: &mut Criterion) {
    // Scattered holes plus one free row: no 3x3 area is open.
    let mut board = Board::new();
    for row in 0..9 {
        for col in 0..10 {
            if (row + col) % 3 != 0 {
                board.set(row, col, Some(PieceColor::Gray));
            }
        }
    }

    c.bench_function("can_place_anywhere_miss", |b| {
        b.iter(|| board.can_place_piece_anywhere(black_box(PieceType::Square3)))
    });
}

fn bench_bag_draw(c: &mut Criterion) {
    let mut bag = PieceBag::new(12345);

    c.bench_function("bag_draw", |b| b.iter(|| bag.draw()));
}

fn bench_turn(c: &mut Criterion) {
    let engine = GameEngine::default();
    let state = engine.new_game(12345);

    c.bench_function("place_piece_turn", |b| {
        b.iter(|| engine.place_piece(black_box(&state), PlaceRequest::new(0, 0, 0)))
    });
}

criterion_group!(
    benches,
    bench_try_place,
    bench_line_clear,
    bench_can_place_anywhere,
    bench_bag_draw,
    bench_turn
);
criterion_main!(benches);
