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

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::{
    board::Board,
    castling_side::CastlingSide,
    color::Color,
    m::{Move, MoveList},
    role::Role,
    square::Square,
};

/// Outcome of a finished game.
///
/// # Examples
///
/// ```
/// use teachess::{Color, Outcome};
///
/// assert_eq!(Outcome::Decisive { winner: Color::Black }.to_string(), "0-1");
/// assert_eq!("1/2-1/2".parse::<Outcome>()?, Outcome::Draw);
/// # Ok::<_, teachess::ParseOutcomeError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    /// The side to move was checkmated.
    Decisive { winner: Color },
    /// The side to move was stalemated.
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }

    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}

/// Error when parsing an [`Outcome`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutcomeError;

impl fmt::Display for ParseOutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid outcome")
    }
}

impl Error for ParseOutcomeError {}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Outcome, ParseOutcomeError> {
        Ok(match s {
            "1-0" => Outcome::Decisive {
                winner: Color::White,
            },
            "0-1" => Outcome::Decisive {
                winner: Color::Black,
            },
            "1/2-1/2" => Outcome::Draw,
            _ => return Err(ParseOutcomeError),
        })
    }
}

/// Rules of the game.
///
/// Legality is decided in stages: the piece's own geometry, then what
/// stands on the target square, then the squares in between (skipped for
/// knights and frogs), and finally whether the mover's king would be in
/// check afterwards. That last stage plays the move on a copy of the board.
impl Board {
    /// Tests if the piece on `from` may go to `to`. Includes castling (as
    /// a king move to the c- or g-file) and en passant.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::{Board, Square};
    ///
    /// let board = Board::new();
    /// assert!(board.is_valid_move(Square::E2, Square::E4));
    /// assert!(board.is_valid_move(Square::G1, Square::F3));
    /// assert!(!board.is_valid_move(Square::F1, Square::C4)); // blocked
    /// assert!(!board.is_valid_move(Square::E4, Square::E5)); // no piece
    /// ```
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        self.classify(from, to).is_some()
    }

    /// Gets the legal move from `from` to `to`, if there is one.
    pub fn legal_move(&self, from: Square, to: Square) -> Option<Move> {
        self.classify(from, to)
    }

    fn classify(&self, from: Square, to: Square) -> Option<Move> {
        let piece = self.piece_at(from)?;
        let color = piece.color();
        let role = piece.role();

        let m = match self.piece_at(to) {
            None if self.can_castle(from, to) => return Some(Move::Castle { king: from, to }),
            None if role == Role::Pawn
                && self.en_passant_square() == Some(to)
                && piece.can_capture(to)
                && self.en_passant_victim(color, from, to).is_some() =>
            {
                Move::EnPassant { from, to }
            }
            None if piece.is_valid_move(to) => Move::Normal {
                role,
                from,
                capture: None,
                to,
            },
            None => return None,
            Some(target) if target.color() != color && piece.can_capture(to) => Move::Normal {
                role,
                from,
                capture: Some(target.role()),
                to,
            },
            Some(_) => return None,
        };

        if !piece.is_hoppable() && !self.has_clear_path(from, to) {
            return None;
        }

        let mut after = self.clone();
        after.play_unchecked(m);
        if after.in_check(color) {
            None
        } else {
            Some(m)
        }
    }

    /// Square of the pawn that would be taken en passant by a pawn of
    /// `color` going from `from` to `to`.
    fn en_passant_victim(&self, color: Color, from: Square, to: Square) -> Option<Square> {
        let victim = Square::from_coords(to.file(), from.rank());
        self.piece_at(victim)
            .filter(|pawn| pawn.role() == Role::Pawn && pawn.color() != color)
            .map(|_| victim)
    }

    /// Plays a legal move, returning `false` and leaving the board
    /// untouched if it is not legal. Capturing overwrites the target square.
    /// A king move to the c- or g-file that is a legal castle moves the rook
    /// as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::{Board, Role, Square};
    ///
    /// let mut board = Board::new();
    /// assert!(board.move_piece(Square::E2, Square::E4));
    /// assert_eq!(board.role_at(Square::E4), Some(Role::Pawn));
    /// assert_eq!(board.en_passant_square(), Some(Square::E3));
    ///
    /// assert!(!board.move_piece(Square::E4, Square::E6));
    /// assert!(board.is_empty(Square::E6));
    /// ```
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        match self.classify(from, to) {
            Some(m) => {
                self.play_unchecked(m);
                debug!(%m, "played move");
                true
            }
            None => {
                trace!(%from, %to, "rejected move");
                false
            }
        }
    }

    /// Plays a move without checking that it is legal.
    ///
    /// Meant for moves returned by [`Board::legal_move()`],
    /// [`Board::legal_moves_from()`] or [`Board::legal_moves()`] for this
    /// very board. Anything else may leave the board in a state that could
    /// not have been reached by legal play.
    pub fn play_unchecked(&mut self, m: Move) {
        match m {
            Move::Normal { role, from, to, .. } => {
                self.relocate(from, to);
                let d_row = to.row() - from.row();
                self.set_en_passant_square(if role == Role::Pawn && d_row.abs() == 2 {
                    from.offset(d_row / 2, 0)
                } else {
                    None
                });
            }
            Move::EnPassant { from, to } => {
                self.relocate(from, to);
                self.remove_piece_at(Square::from_coords(to.file(), from.rank()));
                self.set_en_passant_square(None);
            }
            Move::Castle { king, to } => {
                let side = CastlingSide::from_king_to_file(to.file());
                if let (Some(side), Some(color)) = (side, self.color_at(king)) {
                    self.relocate(king, side.king_to(color));
                    self.relocate(side.rook_from(color), side.rook_to(color));
                }
                self.set_en_passant_square(None);
            }
        }
    }

    /// Moves whatever stands on `from` to `to`, ignoring all rules.
    /// Returns `false` without touching the board if `from` is empty.
    pub fn force_move(&mut self, from: Square, to: Square) -> bool {
        if self.is_empty(from) {
            trace!(%from, %to, "nothing to force move");
            return false;
        }
        self.relocate(from, to);
        self.set_en_passant_square(None);
        true
    }

    /// Tests if the king on `king` may castle by going to `to`.
    ///
    /// The king and the rook in the corner it moves towards must both be on
    /// their starting squares and never have moved, everything in between
    /// must be empty, and the king may neither be in check nor pass through
    /// or land on an attacked square.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::{Board, Square};
    ///
    /// let mut board = Board::new();
    /// assert!(!board.can_castle(Square::E1, Square::G1));
    ///
    /// board.remove_piece_at(Square::F1);
    /// board.remove_piece_at(Square::G1);
    /// assert!(board.can_castle(Square::E1, Square::G1));
    /// assert!(!board.can_castle(Square::E1, Square::C1));
    /// ```
    pub fn can_castle(&self, king: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(king) else {
            return false;
        };
        let Some(side) = CastlingSide::from_king_to_file(to.file()) else {
            return false;
        };
        let color = piece.color();
        if piece.role() != Role::King || !piece.in_starting_position() || to != side.king_to(color) {
            return false;
        }

        let rook = side.rook_from(color);
        let rook_ready = self.piece_at(rook).is_some_and(|rook| {
            rook.role() == Role::Rook && rook.color() == color && rook.in_starting_position()
        });
        if !rook_ready || !self.has_clear_path(king, rook) || self.in_check(color) {
            return false;
        }

        let step = if side.is_king_side() { 1 } else { -1 };
        (1..=2).all(|distance| {
            king.offset(0, step * distance).is_some_and(|transit| {
                let mut after = self.clone();
                after.relocate(king, transit);
                !after.in_check(color)
            })
        })
    }

    /// Castles if [`Board::can_castle()`] allows it.
    pub fn castle(&mut self, king: Square, to: Square) -> bool {
        if self.can_castle(king, to) {
            let m = Move::Castle { king, to };
            self.play_unchecked(m);
            debug!(%m, %king, %to, "castled");
            true
        } else {
            trace!(%king, %to, "rejected castle");
            false
        }
    }

    /// Tests if a pawn stands on `sq` and has reached the far rank.
    pub fn can_promote_pawn(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some_and(|pawn| {
            pawn.role() == Role::Pawn && sq.rank() == pawn.color().promotion_rank()
        })
    }

    /// Replaces a pawn on the far rank with a new piece of the same color.
    /// Pawns may not promote to pawns or kings.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::{Board, Color, Role, Square};
    ///
    /// let mut board: Board = [Role::Pawn.of(Color::White, Square::A7)].into_iter().collect();
    /// assert!(board.move_piece(Square::A7, Square::A8));
    /// assert!(board.can_promote_pawn(Square::A8));
    /// assert!(!board.promote_pawn(Square::A8, Role::King));
    /// assert!(board.promote_pawn(Square::A8, Role::Queen));
    /// assert_eq!(board.role_at(Square::A8), Some(Role::Queen));
    /// ```
    pub fn promote_pawn(&mut self, sq: Square, role: Role) -> bool {
        if matches!(role, Role::Pawn | Role::King) || !self.can_promote_pawn(sq) {
            trace!(%sq, %role, "rejected promotion");
            return false;
        }
        let Some(pawn) = self.piece_at(sq) else {
            return false;
        };
        self.add_piece(role.of(pawn.color(), sq).with_moved(true));
        debug!(%sq, %role, "promoted pawn");
        true
    }

    /// Tests if a piece of color `by` attacks `sq`. Check safety of the
    /// attacker is not considered: a pinned piece still gives check.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces_of(by).any(|piece| self.attacks(piece.square(), sq))
    }

    fn attacks(&self, from: Square, to: Square) -> bool {
        self.piece_at(from).is_some_and(|piece| {
            piece.can_capture(to) && (piece.is_hoppable() || self.has_clear_path(from, to))
        })
    }

    /// Tests if any king of `color` is attacked. A color without a king is
    /// never in check.
    pub fn in_check(&self, color: Color) -> bool {
        self.kings_of(color)
            .any(|king| self.is_attacked(king, color.other()))
    }

    /// Squares of the pieces giving check to `color`.
    pub fn checkers(&self, color: Color) -> ArrayVec<Square, 64> {
        self.pieces_of(color.other())
            .map(|piece| piece.square())
            .filter(|&from| self.kings_of(color).any(|king| self.attacks(from, king)))
            .collect()
    }

    /// Tests if `color` has at least one legal move.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color).any(|piece| {
            Square::ALL
                .into_iter()
                .any(|to| self.is_valid_move(piece.square(), to))
        })
    }

    /// All legal moves of the piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        Square::ALL
            .into_iter()
            .filter_map(|to| self.classify(from, to))
            .collect()
    }

    /// All legal moves of `color`.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|piece| self.legal_moves_from(piece.square()))
            .collect()
    }

    /// In check, without any legal move.
    pub fn checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_any_legal_move(color)
    }

    /// Not in check, without any legal move. A color without a king is
    /// never stalemated.
    pub fn stalemate(&self, color: Color) -> bool {
        self.king_of(color).is_some() && !self.in_check(color) && !self.has_any_legal_move(color)
    }

    /// Outcome of the game if `to_move` is to move, or `None` if the game
    /// goes on.
    ///
    /// # Examples
    ///
    /// ```
    /// use teachess::{Board, Color, Outcome, Square};
    ///
    /// let mut board = Board::new();
    /// for (from, to) in [
    ///     (Square::F2, Square::F3),
    ///     (Square::E7, Square::E5),
    ///     (Square::G2, Square::G4),
    ///     (Square::D8, Square::H4),
    /// ] {
    ///     assert!(board.move_piece(from, to));
    /// }
    /// assert_eq!(board.outcome(Color::White), Some(Outcome::Decisive { winner: Color::Black }));
    /// ```
    pub fn outcome(&self, to_move: Color) -> Option<Outcome> {
        if self.has_any_legal_move(to_move) {
            None
        } else if self.in_check(to_move) {
            Some(Outcome::Decisive {
                winner: to_move.other(),
            })
        } else if self.king_of(to_move).is_some() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn place(pieces: &[(Role, Color, Square)]) -> Board {
        pieces
            .iter()
            .map(|&(role, color, sq)| role.of(color, sq))
            .collect()
    }

    fn play(board: &mut Board, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            assert!(board.move_piece(from, to), "{from}{to} in\n{board:?}");
        }
    }

    #[test]
    fn test_start_position_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves(Color::White).len(), 20);
        assert_eq!(board.legal_moves(Color::Black).len(), 20);
        assert_eq!(board.legal_moves_from(Square::B1).len(), 2);
        assert!(board.legal_moves_from(Square::A1).is_empty());
        assert!(!board.in_check(Color::White));
        assert_eq!(board.outcome(Color::White), None);
    }

    #[test]
    fn test_no_self_capture() {
        let board = Board::new();
        assert!(!board.is_valid_move(Square::D1, Square::D2));
        assert!(!board.is_valid_move(Square::B1, Square::D2));
    }

    #[test]
    fn test_pawn_cannot_push_into_piece() {
        let mut board = Board::new();
        play(&mut board, &[(Square::E2, Square::E4), (Square::E7, Square::E5)]);
        assert!(!board.is_valid_move(Square::E4, Square::E5));
        assert!(!board.is_valid_move(Square::D2, Square::D5));

        board.add_piece(Role::Knight.of(Color::Black, Square::D3));
        assert!(!board.is_valid_move(Square::D2, Square::D4));
        assert!(board.is_valid_move(Square::C2, Square::D3));
    }

    #[test]
    fn test_pinned_piece() {
        let board = place(&[
            (Role::King, Color::White, Square::E1),
            (Role::Bishop, Color::White, Square::E2),
            (Role::Rook, Color::Black, Square::E8),
            (Role::King, Color::Black, Square::A8),
        ]);
        assert!(!board.is_valid_move(Square::E2, Square::D3));
        assert!(board.is_attacked(Square::E2, Color::Black));
        assert!(!board.in_check(Color::White));
        assert!(board.checkers(Color::White).is_empty());
    }

    #[test]
    fn test_king_may_not_walk_into_check() {
        let board = place(&[
            (Role::King, Color::White, Square::E1),
            (Role::Rook, Color::Black, Square::D8),
            (Role::King, Color::Black, Square::A8),
        ]);
        assert!(!board.is_valid_move(Square::E1, Square::D1));
        assert!(!board.is_valid_move(Square::E1, Square::D2));
        assert!(board.is_valid_move(Square::E1, Square::F2));
    }

    #[test]
    fn test_check_and_checkers() {
        let board = place(&[
            (Role::King, Color::White, Square::E1),
            (Role::Knight, Color::Black, Square::F3),
            (Role::Queen, Color::Black, Square::E7),
            (Role::King, Color::Black, Square::A8),
        ]);
        assert!(board.in_check(Color::White));
        let checkers = board.checkers(Color::White);
        assert_eq!(checkers.as_slice(), [Square::F3, Square::E7]);
        assert!(!board.in_check(Color::Black));
    }

    #[test]
    fn test_castling_both_sides() {
        let mut board = place(&[
            (Role::King, Color::Black, Square::E8),
            (Role::Rook, Color::Black, Square::A8),
            (Role::Rook, Color::Black, Square::H8),
            (Role::King, Color::White, Square::E1),
        ]);
        assert!(board.can_castle(Square::E8, Square::G8));
        assert!(board.can_castle(Square::E8, Square::C8));
        assert!(!board.can_castle(Square::E8, Square::F8));
        assert!(!board.can_castle(Square::E8, Square::G7));
        assert!(!board.can_castle(Square::E1, Square::G1));

        assert!(board.move_piece(Square::E8, Square::C8));
        assert_eq!(board.role_at(Square::C8), Some(Role::King));
        assert_eq!(board.role_at(Square::D8), Some(Role::Rook));
        assert!(board.is_empty(Square::A8));
        assert!(board.is_empty(Square::E8));
        assert_eq!(board.role_at(Square::H8), Some(Role::Rook));
    }

    #[test]
    fn test_castling_blocked_by_attacks() {
        let base = [
            (Role::King, Color::White, Square::E1),
            (Role::Rook, Color::White, Square::H1),
            (Role::Rook, Color::White, Square::A1),
            (Role::King, Color::Black, Square::A8),
        ];

        // Through check.
        let mut pieces = base.to_vec();
        pieces.push((Role::Rook, Color::Black, Square::F8));
        let board = place(&pieces);
        assert!(!board.can_castle(Square::E1, Square::G1));
        assert!(board.can_castle(Square::E1, Square::C1));

        // Into check.
        let mut pieces = base.to_vec();
        pieces.push((Role::Bishop, Color::Black, Square::C5));
        let board = place(&pieces);
        assert!(!board.can_castle(Square::E1, Square::G1));

        // Out of check.
        let mut pieces = base.to_vec();
        pieces.push((Role::Rook, Color::Black, Square::E8));
        let board = place(&pieces);
        assert!(!board.can_castle(Square::E1, Square::G1));
        assert!(!board.can_castle(Square::E1, Square::C1));

        // Knight in the way on the queen side.
        let mut pieces = base.to_vec();
        pieces.push((Role::Knight, Color::White, Square::B1));
        let board = place(&pieces);
        assert!(!board.can_castle(Square::E1, Square::C1));
        assert!(board.can_castle(Square::E1, Square::G1));
    }

    #[test]
    fn test_castling_needs_unmoved_pieces() {
        let mut board = place(&[
            (Role::King, Color::White, Square::E1),
            (Role::Rook, Color::White, Square::H1),
            (Role::King, Color::Black, Square::A8),
        ]);
        play(&mut board, &[(Square::H1, Square::H2), (Square::H2, Square::H1)]);
        assert!(!board.can_castle(Square::E1, Square::G1));
        assert!(!board.castle(Square::E1, Square::G1));
        assert_eq!(board.role_at(Square::E1), Some(Role::King));

        let mut board = board_with_moved_king();
        assert!(!board.castle(Square::E1, Square::G1));
    }

    fn board_with_moved_king() -> Board {
        let mut board = place(&[
            (Role::King, Color::White, Square::E1),
            (Role::Rook, Color::White, Square::H1),
        ]);
        board.add_piece(Piece::new(Role::King, Color::White, Square::E1).with_moved(true));
        board
    }

    #[test]
    fn test_castle_atomic_update() {
        let mut board = place(&[
            (Role::King, Color::White, Square::E1),
            (Role::Rook, Color::White, Square::H1),
            (Role::King, Color::Black, Square::E8),
        ]);
        assert!(board.castle(Square::E1, Square::G1));
        assert_eq!(board.role_at(Square::G1), Some(Role::King));
        assert_eq!(board.role_at(Square::F1), Some(Role::Rook));
        assert!(board.is_empty(Square::E1));
        assert!(board.is_empty(Square::H1));
        assert!(board.pieces_of(Color::White).all(|p| p.has_moved()));
    }

    #[test]
    fn test_en_passant() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                (Square::E2, Square::E4),
                (Square::A7, Square::A6),
                (Square::E4, Square::E5),
                (Square::D7, Square::D5),
            ],
        );
        assert_eq!(board.en_passant_square(), Some(Square::D6));
        assert_eq!(
            board.legal_move(Square::E5, Square::D6),
            Some(Move::EnPassant {
                from: Square::E5,
                to: Square::D6
            })
        );
        assert!(board.move_piece(Square::E5, Square::D6));
        assert!(board.is_empty(Square::D5));
        assert_eq!(board.role_at(Square::D6), Some(Role::Pawn));
        assert_eq!(board.en_passant_square(), None);
    }

    #[test]
    fn test_en_passant_expires() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                (Square::E2, Square::E4),
                (Square::A7, Square::A6),
                (Square::E4, Square::E5),
                (Square::D7, Square::D5),
                (Square::H2, Square::H3),
                (Square::H7, Square::H6),
            ],
        );
        assert!(!board.is_valid_move(Square::E5, Square::D6));
    }

    #[test]
    fn test_en_passant_discovered_check() {
        // Taking en passant would open the fifth rank to the rook.
        let mut board = place(&[
            (Role::King, Color::White, Square::A5),
            (Role::Pawn, Color::White, Square::E5),
            (Role::Pawn, Color::Black, Square::D7),
            (Role::Rook, Color::Black, Square::H5),
            (Role::King, Color::Black, Square::H8),
        ]);
        assert!(board.move_piece(Square::D7, Square::D5));
        assert!(!board.is_valid_move(Square::E5, Square::D6));
    }

    #[test]
    fn test_force_move() {
        let mut board = Board::new();
        assert!(!board.force_move(Square::E4, Square::E5));
        assert_eq!(board, Board::new());
        assert!(board.force_move(Square::D1, Square::D7));
        assert_eq!(board.role_at(Square::D7), Some(Role::Queen));
        assert!(board.is_empty(Square::D1));
    }

    #[test]
    fn test_promotion() {
        let mut board = place(&[
            (Role::Pawn, Color::Black, Square::B2),
            (Role::Knight, Color::White, Square::A1),
        ]);
        assert!(!board.can_promote_pawn(Square::B2));
        assert!(board.move_piece(Square::B2, Square::A1));
        assert!(board.can_promote_pawn(Square::A1));
        assert!(!board.promote_pawn(Square::A1, Role::Pawn));
        assert!(board.promote_pawn(Square::A1, Role::Knight));
        assert_eq!(board.color_at(Square::A1), Some(Color::Black));
        assert!(!board.can_promote_pawn(Square::A1));
    }

    #[test]
    fn test_hoppable_pieces_ignore_blockers() {
        let board = Board::house_rules();
        assert!(board.is_valid_move(Square::A3, Square::A5));
        assert!(board.is_valid_move(Square::A3, Square::C3));
        assert!(!board.is_valid_move(Square::A3, Square::A1));
        assert!(board.is_valid_move(Square::E3, Square::D4));
        assert!(!board.is_valid_move(Square::E3, Square::E2));

        let board = place(&[
            (Role::Frog, Color::White, Square::D4),
            (Role::Rook, Color::White, Square::F4),
            (Role::Pawn, Color::Black, Square::D5),
            (Role::Pawn, Color::Black, Square::G4),
        ]);
        assert!(board.is_valid_move(Square::D4, Square::D6));
        assert!(board.is_valid_move(Square::D4, Square::D2));
        assert!(!board.is_valid_move(Square::D4, Square::D5));
        assert!(board.is_valid_move(Square::F4, Square::G4));
        assert!(!board.is_valid_move(Square::F4, Square::H4));
    }

    #[test]
    fn test_without_king() {
        let board = place(&[(Role::Queen, Color::White, Square::D1)]);
        assert!(!board.in_check(Color::Black));
        assert!(!board.checkmate(Color::Black));
        assert!(!board.stalemate(Color::Black));
        assert_eq!(board.outcome(Color::Black), None);
        assert!(board.has_any_legal_move(Color::White));
    }

    #[test]
    fn test_several_kings() {
        let board = place(&[
            (Role::King, Color::White, Square::A1),
            (Role::King, Color::White, Square::H1),
            (Role::Rook, Color::Black, Square::H8),
            (Role::King, Color::Black, Square::A8),
        ]);
        assert!(board.in_check(Color::White));
        assert!(!board.is_valid_move(Square::A1, Square::A2));
        assert!(board.is_valid_move(Square::H1, Square::G1));
    }
}
