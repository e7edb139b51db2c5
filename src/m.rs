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

use std::fmt::{self, Display, Write as _};

use arrayvec::ArrayVec;

use crate::{castling_side::CastlingSide, role::Role, square::Square};

/// A legal move, classified by the [`Board`](crate::Board) rules.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    /// A move or capture, e.g., `Bd3xh7`.
    Normal {
        role: Role,
        from: Square,
        capture: Option<Role>,
        to: Square,
    },
    /// An en passant capture, e.g., `e5xd6`.
    EnPassant { from: Square, to: Square },
    /// Castling, given by the king's origin and destination squares.
    Castle { king: Square, to: Square },
}

impl Move {
    /// Gets the role of the moved piece.
    pub const fn role(self) -> Role {
        match self {
            Move::Normal { role, .. } => role,
            Move::EnPassant { .. } => Role::Pawn,
            Move::Castle { .. } => Role::King,
        }
    }

    /// Gets the origin square. For castling moves this is the king square.
    pub const fn from(self) -> Square {
        match self {
            Move::Normal { from, .. } | Move::EnPassant { from, .. } => from,
            Move::Castle { king, .. } => king,
        }
    }

    /// Gets the target square. For castling moves this is where the king
    /// lands.
    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::EnPassant { to, .. } | Move::Castle { to, .. } => to,
        }
    }

    /// Gets the role of the captured piece or `None`.
    pub const fn capture(self) -> Option<Role> {
        match self {
            Move::Normal { capture, .. } => capture,
            Move::EnPassant { .. } => Some(Role::Pawn),
            Move::Castle { .. } => None,
        }
    }

    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            Move::Normal {
                capture: Some(_),
                ..
            } | Move::EnPassant { .. }
        )
    }

    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    pub const fn castling_side(self) -> Option<CastlingSide> {
        match self {
            Move::Castle { to, .. } => CastlingSide::from_king_to_file(to.file()),
            _ => None,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Normal {
                role,
                from,
                capture,
                to,
            } => {
                if role != Role::Pawn {
                    f.write_char(role.upper_char())?;
                }
                write!(
                    f,
                    "{}{}{}",
                    from,
                    if capture.is_some() { 'x' } else { '-' },
                    to
                )
            }
            Move::EnPassant { from, to } => write!(f, "{from}x{to}"),
            Move::Castle { .. } => {
                f.write_str(if self.castling_side().is_some_and(CastlingSide::is_queen_side) {
                    "O-O-O"
                } else {
                    "O-O"
                })
            }
        }
    }
}

/// Moves of a single piece, stored inline on the stack.
///
/// No piece can reach more than 27 squares, so the capacity is never
/// exceeded.
pub type MoveList = ArrayVec<Move, 64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = Move::Normal {
            role: Role::Bishop,
            from: Square::D3,
            capture: Some(Role::Pawn),
            to: Square::H7,
        };
        assert_eq!(m.to_string(), "Bd3xh7");
        assert!(m.is_capture());

        let m = Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E4,
        };
        assert_eq!(m.to_string(), "e2-e4");

        let m = Move::EnPassant {
            from: Square::E5,
            to: Square::D6,
        };
        assert_eq!(m.to_string(), "e5xd6");
        assert_eq!(m.capture(), Some(Role::Pawn));
    }

    #[test]
    fn test_castle() {
        let m = Move::Castle {
            king: Square::E8,
            to: Square::C8,
        };
        assert_eq!(m.to_string(), "O-O-O");
        assert_eq!(m.castling_side(), Some(CastlingSide::QueenSide));
        assert_eq!(m.role(), Role::King);
        assert_eq!(m.from(), Square::E8);
        assert!(!m.is_capture());

        let m = Move::Castle {
            king: Square::E1,
            to: Square::G1,
        };
        assert_eq!(m.to_string(), "O-O");
    }
}
