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

/// Error when a row or column lies outside of `1..=8`.
///
/// This is the only way coordinates enter the engine unchecked, so it is
/// raised exactly once, when building a [`Square`](crate::Square).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct OutOfBoundsError {
    row: i32,
    column: i32,
}

impl OutOfBoundsError {
    pub(crate) const fn new(row: i32, column: i32) -> OutOfBoundsError {
        OutOfBoundsError { row, column }
    }

    /// The offending row, as given.
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// The offending column, as given.
    pub const fn column(&self) -> i32 {
        self.column
    }
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square off the board (row: {}, column: {})",
            self.row, self.column
        )
    }
}

impl Error for OutOfBoundsError {}
