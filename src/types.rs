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

use crate::{color::Color, role::Role, square::Square};

/// A piece on the board: role, color, the square it stands on, and
/// whether it has moved since it was placed.
///
/// # Examples
///
/// ```
/// use teachess::{Color, Role, Square};
///
/// let mut rook = Role::Rook.of(Color::White, Square::A1);
/// assert!(rook.in_starting_position());
///
/// assert!(!rook.move_to(Square::B2)); // not a rook move
/// assert!(rook.move_to(Square::A4));
/// assert_eq!(rook.square(), Square::A4);
/// assert!(rook.has_moved());
///
/// // Back home, but no longer fit to castle.
/// assert!(rook.move_to(Square::A1));
/// assert!(rook.on_starting_square());
/// assert!(!rook.in_starting_position());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    role: Role,
    color: Color,
    square: Square,
    moved: bool,
}

impl Piece {
    pub const fn new(role: Role, color: Color, square: Square) -> Piece {
        Piece {
            role,
            color,
            square,
            moved: false,
        }
    }

    /// Same piece, flagged as having moved before.
    #[must_use]
    pub const fn with_moved(self, moved: bool) -> Piece {
        Piece { moved, ..self }
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    #[inline]
    pub const fn is_hoppable(&self) -> bool {
        self.role.is_hoppable()
    }

    /// Geometry-only test for a move to an empty square.
    pub fn is_valid_move(&self, to: Square) -> bool {
        self.role.is_valid_move(self.color, self.square, to)
    }

    /// Geometry-only test for a capture on `to`.
    pub fn can_capture(&self, to: Square) -> bool {
        self.role.can_capture(self.color, self.square, to)
    }

    /// Moves the piece if [`Piece::is_valid_move()`] allows it.
    pub fn move_to(&mut self, to: Square) -> bool {
        if self.is_valid_move(to) {
            self.force_move(to);
            true
        } else {
            false
        }
    }

    /// Moves the piece onto `to` if [`Piece::can_capture()`] allows it.
    pub fn capture(&mut self, to: Square) -> bool {
        if self.can_capture(to) {
            self.force_move(to);
            true
        } else {
            false
        }
    }

    /// Moves the piece without asking.
    pub fn force_move(&mut self, to: Square) {
        self.square = to;
        self.moved = true;
    }

    /// On a square where this kind of piece starts the game.
    pub fn on_starting_square(&self) -> bool {
        self.role.is_starting_square(self.color, self.square)
    }

    /// On a starting square, and never moved.
    pub fn in_starting_position(&self) -> bool {
        !self.moved && self.on_starting_square()
    }

    /// Letter of the role, upper case for White.
    pub const fn char(&self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Piece {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Piece> {
        Ok(Piece::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?).with_moved(u.arbitrary()?))
    }
}
