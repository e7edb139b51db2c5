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

use std::fmt;

use crate::{
    color::Color,
    square::{File, Rank, Square},
    types::Piece,
};

/// Piece types: the six standard roles plus the house-rule `Frog` and
/// `Prince`.
///
/// Movement rules that depend on geometry alone live here, as pure
/// functions of the role, the mover's color and the two squares. Anything
/// that needs to look at the rest of the board is a [`Board`](crate::Board)
/// rule.
///
/// # Examples
///
/// ```
/// use teachess::{Color, Role, Square};
///
/// assert!(Role::Knight.is_valid_move(Color::White, Square::G1, Square::F3));
/// assert!(!Role::Bishop.is_valid_move(Color::White, Square::C1, Square::C3));
///
/// // Pawns capture diagonally, but move straight ahead.
/// assert!(Role::Pawn.can_capture(Color::White, Square::E4, Square::D5));
/// assert!(!Role::Pawn.is_valid_move(Color::White, Square::E4, Square::D5));
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
    /// Hops exactly two squares along a row or column.
    Frog = 7,
    /// Steps like a king, but is not royal.
    Prince = 8,
}

impl Role {
    /// Gets the piece type from its letter. `F` is the frog and `I` the
    /// prince.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::Role;
    ///
    /// assert_eq!(Role::from_char('K'), Some(Role::King));
    /// assert_eq!(Role::from_char('f'), Some(Role::Frog));
    /// assert_eq!(Role::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'N' | 'n' => Some(Role::Knight),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'Q' | 'q' => Some(Role::Queen),
            'K' | 'k' => Some(Role::King),
            'F' | 'f' => Some(Role::Frog),
            'I' | 'i' => Some(Role::Prince),
            _ => None,
        }
    }

    /// Gets a [`Piece`] of this role, standing on `square`, that has not
    /// moved yet.
    #[inline]
    pub const fn of(self, color: Color, square: Square) -> Piece {
        Piece::new(self, color, square)
    }

    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
            Role::Frog => 'f',
            Role::Prince => 'i',
        }
    }

    pub const fn upper_char(self) -> char {
        self.char().to_ascii_uppercase()
    }

    /// Knights and frogs jump over whatever stands in between.
    #[inline]
    pub const fn is_hoppable(self) -> bool {
        matches!(self, Role::Knight | Role::Frog)
    }

    /// Only the king can be checked and mated.
    #[inline]
    pub const fn is_royal(self) -> bool {
        matches!(self, Role::King)
    }

    /// Tests if a piece of this role and color could move from `from` to an
    /// empty `to`, looking at geometry only. Never true for `from == to`.
    ///
    /// Castling is not a king move in this sense.
    pub fn is_valid_move(self, color: Color, from: Square, to: Square) -> bool {
        let d_row = to.row() - from.row();
        let d_col = to.column() - from.column();
        if d_row == 0 && d_col == 0 {
            return false;
        }

        match self {
            Role::Pawn => {
                let forward = color.forward();
                d_col == 0
                    && (d_row == forward
                        || (d_row == 2 * forward && from.rank() == color.pawn_rank()))
            }
            Role::Knight => matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)),
            Role::Bishop => d_row.abs() == d_col.abs(),
            Role::Rook => d_row == 0 || d_col == 0,
            Role::Queen => d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs(),
            Role::King | Role::Prince => d_row.abs() <= 1 && d_col.abs() <= 1,
            Role::Frog => matches!((d_row.abs(), d_col.abs()), (0, 2) | (2, 0)),
        }
    }

    /// Tests if a piece of this role and color could capture on `to`,
    /// looking at geometry only. Same as [`Role::is_valid_move()`], except
    /// for pawns, which capture one square diagonally forward.
    pub fn can_capture(self, color: Color, from: Square, to: Square) -> bool {
        match self {
            Role::Pawn => {
                to.row() - from.row() == color.forward()
                    && (to.column() - from.column()).abs() == 1
            }
            _ => self.is_valid_move(color, from, to),
        }
    }

    /// Tests if `square` is one of the squares where pieces of this role and
    /// color are set up at the start of a game.
    pub fn is_starting_square(self, color: Color, square: Square) -> bool {
        let rank = square.rank();
        let file = square.file();
        match self {
            Role::Pawn => rank == color.pawn_rank(),
            Role::Knight => rank == color.backrank() && matches!(file, File::B | File::G),
            Role::Bishop => rank == color.backrank() && matches!(file, File::C | File::F),
            Role::Rook => rank == color.backrank() && matches!(file, File::A | File::H),
            Role::Queen => rank == color.backrank() && file == File::D,
            Role::King => rank == color.backrank() && file == File::E,
            Role::Frog => rank == house_rank(color) && matches!(file, File::A | File::H),
            Role::Prince => rank == house_rank(color) && file == File::E,
        }
    }

    /// The standard roles, `Pawn` to `King`.
    pub const STANDARD: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// All roles, including the house-rule pieces.
    pub const ALL: [Role; 8] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
        Role::Frog,
        Role::Prince,
    ];
}

/// Rank in front of the pawns, where the house-rule pieces start.
const fn house_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Third,
        Color::Black => Rank::Sixth,
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ch = <char as serde::Deserialize>::deserialize(deserializer)?;
        Role::from_char(ch).ok_or_else(|| serde::de::Error::custom("invalid role"))
    }
}
