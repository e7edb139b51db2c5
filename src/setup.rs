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

use std::{error::Error, fmt};

use bitflags::bitflags;
use tracing::debug;

use crate::{
    board::Board,
    color::{ByColor, Color},
    role::Role,
};

bitflags! {
    /// Reasons for a board to be rejected by [`Board::validate()`].
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct SetupErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;

        /// A king is required for each color.
        const MISSING_KING = 1 << 1;

        /// A color has more than one king.
        const TOO_MANY_KINGS = 1 << 2;

        /// A pawn stands on the rank its own pieces start on.
        const PAWNS_ON_BACKRANK = 1 << 3;

        /// Both kings are in check at the same time.
        const IMPOSSIBLE_CHECK = 1 << 4;
    }
}

/// Error when a board is not a sensible game position.
///
/// The rules accept any board, so this is advisory: use it to catch
/// mistakes when building positions by hand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetupError {
    kinds: SetupErrorKinds,
}

impl SetupError {
    /// Returns the reasons for this error.
    pub const fn kinds(&self) -> SetupErrorKinds {
        self.kinds
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reasons = Vec::new();
        if self.kinds.contains(SetupErrorKinds::EMPTY_BOARD) {
            reasons.push("empty board");
        }
        if self.kinds.contains(SetupErrorKinds::MISSING_KING) {
            reasons.push("missing king");
        }
        if self.kinds.contains(SetupErrorKinds::TOO_MANY_KINGS) {
            reasons.push("too many kings");
        }
        if self.kinds.contains(SetupErrorKinds::PAWNS_ON_BACKRANK) {
            reasons.push("pawns on backrank");
        }
        if self.kinds.contains(SetupErrorKinds::IMPOSSIBLE_CHECK) {
            reasons.push("both kings in check");
        }

        f.write_str("illegal setup: ")?;
        if reasons.is_empty() {
            f.write_str("unknown reason")
        } else {
            f.write_str(&reasons.join(", "))
        }
    }
}

impl Error for SetupError {}

impl Board {
    /// Checks that the board is a sensible game position: exactly one king
    /// per color, no pawn on its own back rank, and not both kings in
    /// check.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] listing every problem found.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::{Board, SetupErrorKinds, Square};
    ///
    /// assert!(Board::new().validate().is_ok());
    ///
    /// let mut board = Board::new();
    /// board.remove_piece_at(Square::E8);
    /// let err = board.validate().unwrap_err();
    /// assert_eq!(err.kinds(), SetupErrorKinds::MISSING_KING);
    /// ```
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut kinds = SetupErrorKinds::empty();

        if self.pieces().next().is_none() {
            kinds |= SetupErrorKinds::EMPTY_BOARD;
        }

        let kings = ByColor::new_with(|color| self.kings_of(color).count());
        if kings.any(|&n| n == 0) {
            kinds |= SetupErrorKinds::MISSING_KING;
        }
        if kings.any(|&n| n > 1) {
            kinds |= SetupErrorKinds::TOO_MANY_KINGS;
        }

        if self.pieces().any(|piece| {
            piece.role() == Role::Pawn && piece.square().rank() == piece.color().backrank()
        }) {
            kinds |= SetupErrorKinds::PAWNS_ON_BACKRANK;
        }

        if Color::ALL.into_iter().all(|color| self.in_check(color)) {
            kinds |= SetupErrorKinds::IMPOSSIBLE_CHECK;
        }

        if kinds.is_empty() {
            Ok(())
        } else {
            debug!(?kinds, "invalid setup");
            Err(SetupError { kinds })
        }
    }
}
