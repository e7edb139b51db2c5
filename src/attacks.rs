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

//! Line geometry between squares.
//!
//! # Examples
//!
//! ```
//! use teachess::{attacks, Square};
//!
//! // . . . . . . . .
//! // . . . . . . . .
//! // . . . . . t . .
//! // . . . . 1 . . .
//! // . . . 1 . . . .
//! // . . 1 . . . . .
//! // . f . . . . . .
//! // . . . . . . . .
//! let squares: Vec<Square> = attacks::between(Square::B2, Square::F6).collect();
//! assert_eq!(squares, [Square::C3, Square::D4, Square::E5]);
//!
//! assert!(attacks::aligned(Square::A1, Square::A8));
//! assert!(!attacks::aligned(Square::B1, Square::C3));
//! ```

use std::iter::FusedIterator;

use crate::square::Square;

/// Tests if two distinct squares share a row, a column or a diagonal.
pub fn aligned(a: Square, b: Square) -> bool {
    let d_row = b.row() - a.row();
    let d_col = b.column() - a.column();
    a != b && (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
}

/// Iterates the squares strictly between `a` and `b`, starting next to `a`.
///
/// The squares must be [`aligned()`]. For any other pair the iterator is
/// empty, and debug builds panic.
pub fn between(a: Square, b: Square) -> Between {
    let d_row = b.row() - a.row();
    let d_col = b.column() - a.column();
    debug_assert!(
        a == b || aligned(a, b),
        "between() requires aligned squares, got {a} and {b}"
    );
    let remaining = if aligned(a, b) {
        d_row.abs().max(d_col.abs()) - 1
    } else {
        0
    };
    Between {
        cursor: a,
        d_row: d_row.signum(),
        d_col: d_col.signum(),
        remaining,
    }
}

/// Iterator returned by [`between()`].
#[derive(Clone, Debug)]
pub struct Between {
    cursor: Square,
    d_row: i32,
    d_col: i32,
    remaining: i32,
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.remaining <= 0 {
            return None;
        }
        self.cursor = self.cursor.offset(self.d_row, self.d_col)?;
        self.remaining -= 1;
        Some(self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.max(0) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Between {}

impl FusedIterator for Between {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_rows_and_columns() {
        assert_eq!(
            between(Square::A1, Square::A5).collect::<Vec<_>>(),
            [Square::A2, Square::A3, Square::A4]
        );
        assert_eq!(
            between(Square::H8, Square::E8).collect::<Vec<_>>(),
            [Square::G8, Square::F8]
        );
        assert_eq!(between(Square::D4, Square::D5).count(), 0);
    }

    #[test]
    fn test_between_diagonals() {
        assert_eq!(
            between(Square::H1, Square::E4).collect::<Vec<_>>(),
            [Square::G2, Square::F3]
        );
        assert_eq!(
            between(Square::C6, Square::A8).collect::<Vec<_>>(),
            [Square::B7]
        );
        assert_eq!(between(Square::A1, Square::H8).len(), 6);
    }

    #[test]
    fn test_between_is_symmetric() {
        for a in Square::ALL {
            for b in Square::ALL {
                if aligned(a, b) {
                    let mut forth: Vec<_> = between(a, b).collect();
                    forth.reverse();
                    assert_eq!(forth, between(b, a).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn test_aligned() {
        assert!(aligned(Square::B2, Square::G7));
        assert!(aligned(Square::B2, Square::B8));
        assert!(!aligned(Square::B2, Square::B2));
        assert!(!aligned(Square::G1, Square::F3));
    }
}
