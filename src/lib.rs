//! A library for chess vocabulary and piece-wise move generation.
//!
//! The crate models a position as plain values: a [`Board`] of given
//! dimensions owns the live [`Piece`]s of both colours, and each piece
//! generates the squares it could geometrically move to. Moves are
//! *pseudo-legal*: blocking and capture eligibility are accounted for, but
//! filtering out moves that leave one's own king in check, turn sequencing
//! and the special-move bookkeeping (castling, en passant, promotion choice)
//! are left to the layer driving the board.
//!
//! # Examples
//!
//! Generate the moves of a knight in the starting position:
//!
//! ```
//! use raychess::{Board, Coordinate, PieceKind};
//!
//! let board = Board::standard();
//! let knight = *board.piece_at(Coordinate::new(1, 0)).unwrap();
//! assert_eq!(knight.kind, PieceKind::Knight);
//! assert_eq!(
//!     knight.moves(&board),
//!     vec![Coordinate::new(2, 2), Coordinate::new(0, 2)],
//! );
//! ```
//!
//! Capture a piece and keep it in a [`CaptureArea`]:
//!
//! ```
//! use raychess::{Area, Board, CaptureArea, ColourFilter, Coordinate};
//!
//! let mut board = Board::standard();
//! let mut captured = CaptureArea::new();
//!
//! // A capture is a removal from the board and an addition to the capture
//! // area, performed by the caller.
//! let victim = board.remove_piece(Coordinate::new(3, 6), ColourFilter::Any).unwrap();
//! captured.add_piece(victim);
//! captured.sort_pieces();
//! assert_eq!(captured.len(), 1);
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html)
//!   for the plain data types.
//! * `arbitrary`: Implements [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for the plain data types.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod area;
mod board;
mod capture;
mod colour;
mod coord;
mod piece;

pub use area::{Area, Bounded};
pub use board::Board;
pub use capture::CaptureArea;
pub use colour::{AmbiguousColourError, ByColour, Colour, ColourFilter, ParseColourError};
pub use coord::{Coordinate, Direction};
pub use piece::{Piece, PieceKind};
