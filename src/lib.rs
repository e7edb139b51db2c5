//! A two-player chess rules engine.
//!
//! The engine decides which moves are legal on a [`Board`], applies them,
//! and detects check, checkmate and stalemate. It knows castling, pawn
//! promotion and en passant, as well as two house-rule pieces, the hopping
//! [`Role::Frog`] and the king-like but expendable [`Role::Prince`].
//!
//! Turn order, notation and user interaction are up to the caller.
//!
//! # Examples
//!
//! Check moves before playing them:
//!
//! ```
//! use teachess::{Board, Square};
//!
//! let mut board = Board::new();
//! assert!(board.is_valid_move(Square::G1, Square::F3));
//! assert!(!board.is_valid_move(Square::G1, Square::G3));
//!
//! assert!(board.move_piece(Square::G1, Square::F3));
//! ```
//!
//! Address squares by row and column, or by name:
//!
//! ```
//! use teachess::{File, Square};
//!
//! assert_eq!(Square::new(2, 5)?, Square::E2);
//! assert_eq!(Square::from_algebraic(File::E, 2)?, Square::E2);
//! assert_eq!("e2".parse::<Square>()?, Square::E2);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use teachess::{Board, Color};
//!
//! let board = Board::new();
//! assert!(!board.in_check(Color::White));
//! assert!(!board.checkmate(Color::White));
//! assert!(!board.stalemate(Color::White));
//! assert_eq!(board.outcome(Color::White), None); // game goes on
//! ```
//!
//! # Logging
//!
//! Committed moves, castles and promotions are reported as
//! [`tracing`](https://docs.rs/tracing/0.1) events at debug level, rejected
//! ones at trace level. No subscriber is installed.
//!
//! # Feature flags
//!
//! * `arbitrary`: Implements [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types and [`Board`].
//! * `serde`: Implements [`serde`](https://docs.rs/serde/1)
//!   serialization/deserialization for [`Color`], [`Role`], [`File`],
//!   [`Rank`] and [`Square`].
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/teachess/0.3.0")]

mod castling_side;
mod color;
mod errors;
mod m;
mod perft;
mod position;
mod role;
mod setup;
mod square;
mod types;

pub mod attacks;
pub mod board;

pub use board::Board;
pub use castling_side::CastlingSide;
pub use color::{ByColor, Color, ParseColorError};
pub use errors::OutOfBoundsError;
pub use m::{Move, MoveList};
pub use perft::perft;
pub use position::{Outcome, ParseOutcomeError};
pub use role::Role;
pub use setup::{SetupError, SetupErrorKinds};
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
