// This file is part of the raychess library.
// Copyright (C) 2024-2026 the raychess authors
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

use std::{collections::HashMap, fmt};

use crate::{
    area::{Area, Bounded},
    colour::{AmbiguousColourError, ByColour, Colour, ColourFilter},
    coord::Coordinate,
    piece::{Piece, PieceKind},
};

/// A board holding the live pieces of both sides.
///
/// Pieces are kept in one dense collection per colour, with a coordinate
/// index on top so [`piece_at`](Board::piece_at) is a constant-time lookup.
/// At most one piece occupies a coordinate, and a stored piece is always
/// found under the coordinate it reports as its position. To preserve that,
/// the board never hands out mutable piece references: relocation is
/// [`remove_piece`](Area::remove_piece), [`Piece::move_to`], then
/// [`add_piece`](Area::add_piece).
///
/// # Examples
///
/// ```
/// use raychess::{Area, Board, Colour, ColourFilter, Coordinate, PieceKind};
///
/// let mut board = Board::standard();
/// let d7 = Coordinate::new(3, 6);
/// assert_eq!(board.piece_at(d7).map(|p| p.kind), Some(PieceKind::Pawn));
///
/// let captured = board.remove_piece(d7, ColourFilter::Any).unwrap();
/// assert_eq!(captured.colour, Colour::Black);
/// assert!(board.piece_at(d7).is_none());
/// ```
#[derive(Clone)]
pub struct Board {
    width: i32,
    height: i32,
    pieces: ByColour<Vec<Piece>>,
    index: HashMap<Coordinate, (Colour, usize)>,
}

/// Kinds on the back rank of the regular arrangement, from the A file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Constructs an empty board of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Board {
        assert!(width > 0 && height > 0);
        Board {
            width,
            height,
            pieces: ByColour::default(),
            index: HashMap::new(),
        }
    }

    /// Constructs an 8 × 8 board with the regular starting arrangement.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::{Board, Colour};
    ///
    /// let board = Board::standard();
    /// assert_eq!(board.pieces(Colour::White).len(), 16);
    /// assert_eq!(board.pieces(Colour::Black).len(), 16);
    /// ```
    pub fn standard() -> Board {
        let mut board = Board::new(8, 8);
        for (x, kind) in BACK_RANK.into_iter().enumerate() {
            let x = x as i32;
            board.add_piece(kind.of(Colour::White, Coordinate::new(x, 0)));
            board.add_piece(PieceKind::Pawn.of(Colour::White, Coordinate::new(x, 1)));
            board.add_piece(PieceKind::Pawn.of(Colour::Black, Coordinate::new(x, 6)));
            board.add_piece(kind.of(Colour::Black, Coordinate::new(x, 7)));
        }
        board
    }

    /// Gets the live pieces of a concrete colour, in a stable but otherwise
    /// arbitrary order.
    #[inline]
    pub fn pieces(&self, colour: Colour) -> &[Piece] {
        self.pieces.by_colour(colour)
    }

    /// Gets the piece at `position`, if any.
    #[inline]
    pub fn piece_at(&self, position: Coordinate) -> Option<&Piece> {
        let &(colour, i) = self.index.get(&position)?;
        Some(&self.pieces.by_colour(colour)[i])
    }

    /// Removes the piece of the given colour at `position`, patching the
    /// index entry of whichever piece backfills the vacated slot.
    fn take(&mut self, position: Coordinate, colour: Colour) -> Option<Piece> {
        let (_, i) = self.index.remove(&position)?;
        let pieces = self.pieces.by_colour_mut(colour);
        let piece = pieces.swap_remove(i);
        if let Some(swapped) = pieces.get(i) {
            self.index.insert(swapped.position(), (colour, i));
        }
        Some(piece)
    }
}

impl Default for Board {
    /// The regular starting arrangement, like [`Board::standard`].
    fn default() -> Board {
        Board::standard()
    }
}

impl Bounded for Board {
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }
}

impl Area for Board {
    /// Gets the live pieces of one side. A board is partitioned by colour,
    /// so [`ColourFilter::Any`] is rejected with [`AmbiguousColourError`].
    fn pieces_by_colour(&self, filter: ColourFilter) -> Result<&[Piece], AmbiguousColourError> {
        filter
            .as_colour()
            .map(|colour| self.pieces(colour))
            .ok_or(AmbiguousColourError)
    }

    /// Adds a piece to the collection matching its colour.
    ///
    /// The caller must ensure the piece's position is vacant; this is a
    /// precondition, checked only in debug builds.
    fn add_piece(&mut self, piece: Piece) {
        debug_assert!(
            self.piece_at(piece.position()).is_none(),
            "two pieces on {}",
            piece.position(),
        );
        let pieces = self.pieces.by_colour_mut(piece.colour);
        self.index
            .insert(piece.position(), (piece.colour, pieces.len()));
        pieces.push(piece);
    }

    /// Removes and returns the piece at `position` if its colour is selected
    /// by `filter`. With [`ColourFilter::Any`] the occupant's own colour is
    /// looked up, so callers that do not know the captured side need not
    /// try both. A vacant square or a colour mismatch is a no-op returning
    /// `None`.
    fn remove_piece(&mut self, position: Coordinate, filter: ColourFilter) -> Option<Piece> {
        let &(colour, _) = self.index.get(&position)?;
        if filter.matches(colour) {
            self.take(position, colour)
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.pieces.white.clear();
        self.pieces.black.clear();
        self.index.clear();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                match self.piece_at(Coordinate::new(x, y)) {
                    Some(piece) => write!(f, "{}", piece.char())?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
