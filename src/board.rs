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

//! Piece placement.

use std::fmt::{self, Write as _};

use crate::{
    attacks,
    color::Color,
    role::Role,
    square::{File, Square},
    types::Piece,
};

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// An 8x8 board of optional [`Piece`]s, plus the en passant target left by
/// the last pawn double step.
///
/// Every piece stands on the square it believes it stands on. Cloning is a
/// flat copy, so a clone and its source never affect each other.
///
/// # Examples
///
/// ```
/// use teachess::{Board, Color, Role, Square};
///
/// let board = Board::new();
/// let rook = board.piece_at(Square::A1).unwrap();
/// assert_eq!((rook.role(), rook.color()), (Role::Rook, Color::White));
/// assert_eq!(board.piece_at(Square::E8).map(|p| p.role()), Some(Role::King));
/// assert!(board.is_empty(Square::D4));
///
/// assert_eq!(format!("{board:?}"), concat!(
///     "r n b q k b n r\n",
///     "p p p p p p p p\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     "P P P P P P P P\n",
///     "R N B Q K B N R\n",
/// ));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    ep_square: Option<Square>,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, role) in File::ALL.into_iter().zip(BACKRANK) {
                board.add_piece(role.of(color, Square::from_coords(file, color.backrank())));
                board.add_piece(Role::Pawn.of(color, Square::from_coords(file, color.pawn_rank())));
            }
        }
        board
    }

    /// A board without any pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
            ep_square: None,
        }
    }

    /// The standard starting position, with frogs on the a- and h-files and
    /// princes on the e-file, on the ranks in front of the pawns.
    ///
    /// ```
    /// use teachess::{Board, Role, Square};
    ///
    /// let board = Board::house_rules();
    /// assert_eq!(board.piece_at(Square::H6).map(|p| p.role()), Some(Role::Frog));
    /// assert_eq!(board.piece_at(Square::E3).map(|p| p.role()), Some(Role::Prince));
    /// ```
    pub fn house_rules() -> Board {
        let mut board = Board::new();
        for color in Color::ALL {
            for sq in Square::ALL {
                for role in [Role::Frog, Role::Prince] {
                    if role.is_starting_square(color, sq) {
                        board.add_piece(role.of(color, sq));
                    }
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role())
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color())
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Places a piece on its square, returning whatever stood there before.
    pub fn add_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.squares[piece.square().index()].replace(piece)
    }

    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterates over all pieces, from `a1` to `h8`.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color() == color)
    }

    /// Squares of all royal pieces of `color`. Normally there is exactly
    /// one.
    pub fn kings_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces_of(color)
            .filter(|piece| piece.role().is_royal())
            .map(|piece| piece.square())
    }

    /// The square of the king of `color`, if there is one. If there are
    /// several, the first one from `a1`.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.kings_of(color).next()
    }

    /// The square a pawn skipped with a double step on the last move.
    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.ep_square
    }

    pub(crate) fn set_en_passant_square(&mut self, ep_square: Option<Square>) {
        self.ep_square = ep_square;
    }

    /// Tests if all squares strictly between two squares on a common row,
    /// column or diagonal are empty. False for squares that are not on a
    /// common line.
    ///
    /// ```
    /// use teachess::{Board, Square};
    ///
    /// let board = Board::new();
    /// assert!(board.has_clear_path(Square::A2, Square::A7));
    /// assert!(!board.has_clear_path(Square::A1, Square::A3));
    /// assert!(!board.has_clear_path(Square::B1, Square::C3));
    /// ```
    pub fn has_clear_path(&self, from: Square, to: Square) -> bool {
        attacks::aligned(from, to) && attacks::between(from, to).all(|sq| self.is_empty(sq))
    }

    /// Moves the piece on `from` to `to` without asking, returning what was
    /// captured on `to`, if anything.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.remove_piece_at(from)?;
        piece.force_move(to);
        self.add_piece(piece)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl FromIterator<Piece> for Board {
    fn from_iter<T>(iter: T) -> Board
    where
        T: IntoIterator<Item = Piece>,
    {
        let mut board = Board::empty();
        board.extend(iter);
        board
    }
}

impl Extend<Piece> for Board {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = Piece>,
    {
        for piece in iter {
            self.add_piece(piece);
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for (column, sq) in Square::ALL[row * 8..row * 8 + 8].iter().enumerate() {
                f.write_char(self.piece_at(*sq).map_or('.', |piece| piece.char()))?;
                f.write_char(if column < 7 { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Board {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Board> {
        let mut board = Board::empty();
        for sq in Square::ALL {
            if let Some((role, color, moved)) = u.arbitrary::<Option<(Role, Color, bool)>>()? {
                board.add_piece(role.of(color, sq).with_moved(moved));
            }
        }
        board.ep_square = u.arbitrary()?;
        Ok(board)
    }
}
