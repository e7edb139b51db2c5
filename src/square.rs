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

use std::{error::Error, fmt, str::FromStr};

use crate::errors::OutOfBoundsError;

/// A column of the board, `A` to `H`.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Gets the file from its 1-based column number.
    #[inline]
    pub const fn from_column(column: i32) -> Option<File> {
        Some(match column {
            1 => File::A,
            2 => File::B,
            3 => File::C,
            4 => File::D,
            5 => File::E,
            6 => File::F,
            7 => File::G,
            8 => File::H,
            _ => return None,
        })
    }

    /// 1-based column number.
    #[inline]
    pub const fn column(self) -> i32 {
        self as i32 + 1
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<File> {
        match ch {
            'a'..='h' => File::from_column(ch as i32 - 'a' as i32 + 1),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

/// A row of the board, `First` to `Eighth`, as seen from White.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    /// Gets the rank from its 1-based row number.
    #[inline]
    pub const fn from_row(row: i32) -> Option<Rank> {
        Some(match row {
            1 => Rank::First,
            2 => Rank::Second,
            3 => Rank::Third,
            4 => Rank::Fourth,
            5 => Rank::Fifth,
            6 => Rank::Sixth,
            7 => Rank::Seventh,
            8 => Rank::Eighth,
            _ => return None,
        })
    }

    /// 1-based row number.
    #[inline]
    pub const fn row(self) -> i32 {
        self as i32 + 1
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1'..='8' => Rank::from_row(ch as i32 - '0' as i32),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseSquareError {
    /// Not of the form `<file letter><rank number>`.
    Syntax,
    /// Well formed, but the rank is not on the board.
    OutOfBounds(OutOfBoundsError),
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSquareError::Syntax => f.write_str("invalid square name"),
            ParseSquareError::OutOfBounds(err) => err.fmt(f),
        }
    }
}

impl Error for ParseSquareError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseSquareError::Syntax => None,
            ParseSquareError::OutOfBounds(err) => Some(err),
        }
    }
}

impl From<OutOfBoundsError> for ParseSquareError {
    fn from(err: OutOfBoundsError) -> ParseSquareError {
        ParseSquareError::OutOfBounds(err)
    }
}

/// A square of the board.
///
/// Can only be built through checked constructors, so every square is on
/// the board. Rows and columns are numbered from 1 to 8, the same
/// coordinates as file `a`..`h` and rank `1`..`8`.
///
/// # Examples
///
/// ```
/// use teachess::{File, Rank, Square};
///
/// let sq = Square::new(4, 5)?;
/// assert_eq!(sq, Square::E4);
/// assert_eq!(sq.file(), File::E);
/// assert_eq!(sq.rank(), Rank::Fourth);
/// assert_eq!(Square::from_algebraic(File::E, 4)?, sq);
/// assert_eq!("e4".parse::<Square>()?, sq);
///
/// assert!(Square::new(9, 1).is_err());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

macro_rules! square_consts {
    ($($name:ident = $index:expr),* $(,)?) => {
        impl Square {
            $(
                #[allow(missing_docs)]
                pub const $name: Square = Square($index);
            )*
        }
    };
}

square_consts! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl Square {
    /// Gets the square at a 1-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if either coordinate is outside of
    /// `1..=8`.
    pub const fn new(row: i32, column: i32) -> Result<Square, OutOfBoundsError> {
        match (Rank::from_row(row), File::from_column(column)) {
            (Some(rank), Some(file)) => Ok(Square::from_coords(file, rank)),
            _ => Err(OutOfBoundsError::new(row, column)),
        }
    }

    /// Gets the square from a file letter and a rank number.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `rank` is outside of `1..=8`.
    pub const fn from_algebraic(file: File, rank: i32) -> Result<Square, OutOfBoundsError> {
        Square::new(rank, file.column())
    }

    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(file as u8 | ((rank as u8) << 3))
    }

    /// Parses a square name like `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError::OutOfBounds`] for names like `a9`,
    /// [`ParseSquareError::Syntax`] for anything else that is not a square.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let (&file, rank) = s.split_first().ok_or(ParseSquareError::Syntax)?;
        let file = File::from_char(char::from(file)).ok_or(ParseSquareError::Syntax)?;
        let rank = btoi::btou::<i32>(rank).map_err(|_| ParseSquareError::Syntax)?;
        Ok(Square::from_algebraic(file, rank)?)
    }

    #[inline]
    pub const fn file(self) -> File {
        match File::from_column((self.0 & 7) as i32 + 1) {
            Some(file) => file,
            None => File::A,
        }
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_row((self.0 >> 3) as i32 + 1) {
            Some(rank) => rank,
            None => Rank::First,
        }
    }

    /// 1-based row, the rank number.
    #[inline]
    pub const fn row(self) -> i32 {
        (self.0 >> 3) as i32 + 1
    }

    /// 1-based column, `a` being 1.
    #[inline]
    pub const fn column(self) -> i32 {
        (self.0 & 7) as i32 + 1
    }

    /// Index from 0 (`a1`) to 63 (`h8`), file first.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Gets the square at the given index, if it is below 64.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Moves by the given number of rows and columns, if the result is
    /// still on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::Square;
    ///
    /// assert_eq!(Square::E2.offset(2, 0), Some(Square::E4));
    /// assert_eq!(Square::H1.offset(0, 1), None);
    /// ```
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Option<Square> {
        match Square::new(self.row() + d_row, self.column() + d_col) {
            Ok(sq) => Some(sq),
            Err(_) => None,
        }
    }

    /// All squares, `a1`, `b1`, ..., `h8`.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };
}

impl From<(File, Rank)> for Square {
    #[inline]
    fn from((file, rank): (File, Rank)) -> Square {
        Square::from_coords(file, rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().char(), self.rank().char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string().to_uppercase())
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        Ok(Square(u.int_in_range(0..=63)?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <u8 as arbitrary::Arbitrary>::size_hint(depth)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Square, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("square name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Square, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for File {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for File {
    fn deserialize<D>(deserializer: D) -> Result<File, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ch = <char as serde::Deserialize>::deserialize(deserializer)?;
        File::from_char(ch).ok_or_else(|| serde::de::Error::custom("invalid file"))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Rank, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ch = <char as serde::Deserialize>::deserialize(deserializer)?;
        Rank::from_char(ch).ok_or_else(|| serde::de::Error::custom("invalid rank"))
    }
}
