#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use teachess::{Board, Square};

#[derive(Debug, Arbitrary)]
struct Data {
    board: Board,
    from: Square,
    to: Square,
}

fuzz_target!(|data: Data| {
    let legals = data.board.legal_moves_from(data.from);
    assert_eq!(
        legals.iter().any(|m| m.to() == data.to),
        data.board.is_valid_move(data.from, data.to)
    );

    for m in legals {
        let mut after = data.board.clone();
        assert!(after.move_piece(m.from(), m.to()));
        if let Some(color) = data.board.color_at(m.from()) {
            assert!(!after.in_check(color));
        }
    }
});
