use iai::black_box;
use teachess::{perft, Board, Color, Square};

fn bench_shallow_perft() {
    let board = Board::new();
    assert_eq!(black_box(perft(black_box(&board), Color::White, 2)), 400);
}

fn bench_deep_perft() {
    let board = Board::new();
    assert_eq!(perft(black_box(&board), Color::White, 3), 8_902);
}

fn bench_house_rules_perft() -> u64 {
    perft(black_box(&Board::house_rules()), Color::White, 2)
}

fn bench_legal_moves() {
    let board = Board::new();
    assert_eq!(black_box(&board).legal_moves(Color::White).len(), 20);
}

fn bench_checkmate() {
    let mut board = Board::new();
    for (from, to) in [
        (Square::F2, Square::F3),
        (Square::E7, Square::E5),
        (Square::G2, Square::G4),
        (Square::D8, Square::H4),
    ] {
        assert!(board.move_piece(from, to));
    }
    assert!(black_box(&board).checkmate(Color::White));
}

fn bench_clone() -> Board {
    black_box(Board::house_rules()).clone()
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_house_rules_perft,
    bench_legal_moves,
    bench_checkmate,
    bench_clone,
);
