// This file is part of the teachess library.
// Copyright (C) 2024-2026 The teachess developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use teachess::{perft, Board, Color};
//!
//! let board = Board::new();
//! assert_eq!(perft(&board, Color::White, 1), 20);
//! assert_eq!(perft(&board, Color::White, 2), 400);
//! assert_eq!(perft(&board, Color::White, 3), 8902);
//! ```

use crate::{board::Board, color::Color};

/// Counts legal move paths of a given length, starting with `to_move` and
/// alternating colors.
///
/// Paths ending early in mate or stalemate are not counted. A pawn
/// reaching the last rank counts once, promotions are not expanded. Useful
/// for comparing, testing and debugging the move rules.
pub fn perft(board: &Board, to_move: Color, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = board.legal_moves(to_move);
    if depth == 1 {
        moves.len() as u64
    } else {
        moves
            .into_iter()
            .map(|m| {
                let mut child = board.clone();
                child.play_unchecked(m);
                perft(&child, !to_move, depth - 1)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{role::Role, square::Square};

    #[test]
    fn test_depth_zero() {
        assert_eq!(perft(&Board::empty(), Color::White, 0), 1);
        assert_eq!(perft(&Board::empty(), Color::White, 1), 0);
    }

    #[test]
    fn test_black_to_move() {
        assert_eq!(perft(&Board::new(), Color::Black, 2), 400);
    }

    #[test]
    fn test_kings_only() {
        let board: Board = [
            Role::King.of(Color::White, Square::A1),
            Role::King.of(Color::Black, Square::H8),
        ]
        .into_iter()
        .collect();
        assert_eq!(perft(&board, Color::White, 1), 3);
        assert_eq!(perft(&board, Color::White, 2), 9);
    }
}
