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

use crate::{
    area::Area,
    colour::{AmbiguousColourError, ColourFilter},
    coord::Coordinate,
    piece::Piece,
};

/// Holds the pieces captured over the course of a game.
///
/// Unlike a [`Board`](crate::Board), a capture area keeps a single unordered
/// bag with no positional meaning: the coordinates stored in its pieces are
/// inert leftovers of their last board square. The bag can be sorted in
/// place by point value for display.
///
/// # Examples
///
/// ```
/// use raychess::{Area, CaptureArea, Colour, ColourFilter, Coordinate, PieceKind};
///
/// let mut captured = CaptureArea::new();
/// captured.add_piece(PieceKind::Queen.of(Colour::Black, Coordinate::new(3, 7)));
/// captured.add_piece(PieceKind::Pawn.of(Colour::White, Coordinate::new(4, 4)));
/// captured.sort_pieces();
///
/// let pieces = captured.pieces_by_colour(ColourFilter::Any)?;
/// assert_eq!(pieces[0].kind, PieceKind::Pawn);
/// assert_eq!(pieces[1].kind, PieceKind::Queen);
/// # Ok::<_, raychess::AmbiguousColourError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureArea {
    pieces: Vec<Piece>,
}

impl CaptureArea {
    /// Constructs an empty capture area.
    pub fn new() -> CaptureArea {
        CaptureArea::default()
    }

    /// Gets all captured pieces, in insertion order until sorted.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl Area for CaptureArea {
    /// Gets the captured pieces. A capture area does not separate by colour
    /// for retrieval, so every filter succeeds with the whole collection.
    fn pieces_by_colour(&self, _filter: ColourFilter) -> Result<&[Piece], AmbiguousColourError> {
        Ok(&self.pieces)
    }

    fn add_piece(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    /// Removes and returns the first piece whose inert coordinate is
    /// `position` and whose colour is selected by `filter`, if any.
    fn remove_piece(&mut self, position: Coordinate, filter: ColourFilter) -> Option<Piece> {
        let i = self
            .pieces
            .iter()
            .position(|piece| piece.position() == position && filter.matches(piece.colour))?;
        Some(self.pieces.remove(i))
    }

    fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Stable sort, ascending by point value. Captured pieces of equal
    /// value keep their relative order, so sorting twice changes nothing.
    fn sort_pieces(&mut self) {
        self.pieces.sort_by_key(Piece::point_value);
    }
}
