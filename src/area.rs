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
    colour::{AmbiguousColourError, ColourFilter},
    coord::Coordinate,
    piece::Piece,
};

/// Common contract of anything that holds pieces, such as a
/// [`Board`](crate::Board) or a [`CaptureArea`](crate::CaptureArea).
pub trait Area {
    /// Gets the held pieces selected by `filter`.
    ///
    /// Whether [`ColourFilter::Any`] is meaningful depends on the area: a
    /// board partitions by colour and rejects it with
    /// [`AmbiguousColourError`], while a capture area keeps a single
    /// collection and returns it for every filter.
    fn pieces_by_colour(&self, filter: ColourFilter) -> Result<&[Piece], AmbiguousColourError>;

    /// Adds a piece to the area.
    fn add_piece(&mut self, piece: Piece);

    /// Removes and returns the first piece at `position` whose colour is
    /// selected by `filter`. Returns `None`, without touching the area, if
    /// no such piece is held.
    fn remove_piece(&mut self, position: Coordinate, filter: ColourFilter) -> Option<Piece>;

    /// Removes all pieces from the area.
    fn clear(&mut self);

    /// Sorts the held pieces. The default does nothing; areas with a
    /// meaningful order override it.
    fn sort_pieces(&mut self) {}
}

/// Areas with fixed dimensions, set at construction.
pub trait Bounded {
    /// The number of files.
    fn width(&self) -> i32;

    /// The number of ranks.
    fn height(&self) -> i32;

    /// Checks whether `position` lies within this area's dimensions.
    fn is_within_bounds(&self, position: Coordinate) -> bool {
        !position.is_out_of_bounds(self.width(), self.height())
    }
}
