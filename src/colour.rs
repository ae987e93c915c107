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

use std::{error::Error, fmt, mem, ops, str::FromStr};

use crate::coord::Direction;

/// `White` or `Black`.
///
/// Every stored piece has a concrete colour. Queries that may address either
/// side use [`ColourFilter`] instead.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Colour {
    Black = 0,
    White = 1,
}

impl Colour {
    pub fn from_char(ch: char) -> Option<Colour> {
        match ch {
            'w' => Some(Colour::White),
            'b' => Some(Colour::Black),
            _ => None,
        }
    }

    #[inline]
    pub fn from_white(white: bool) -> Colour {
        if white {
            Colour::White
        } else {
            Colour::Black
        }
    }

    #[inline]
    pub fn fold<T>(self, white: T, black: T) -> T {
        match self {
            Colour::White => white,
            Colour::Black => black,
        }
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self == Colour::White
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Colour::Black
    }

    /// The direction pawns of this colour travel.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::{Colour, Direction};
    ///
    /// assert_eq!(Colour::White.forward(), Direction::Up);
    /// assert_eq!(Colour::Black.forward(), Direction::Down);
    /// ```
    #[inline]
    pub fn forward(self) -> Direction {
        self.fold(Direction::Up, Direction::Down)
    }

    /// The rank on which a pawn of this colour promotes, for a board of the
    /// given height: the farthest rank for white, rank 0 for black.
    #[inline]
    pub fn promotion_rank(self, height: i32) -> i32 {
        self.fold(height - 1, 0)
    }

    pub fn char(self) -> char {
        self.fold('w', 'b')
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];
}

impl ops::Not for Colour {
    type Output = Colour;

    #[inline]
    fn not(self) -> Colour {
        self.fold(Colour::Black, Colour::White)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("white", "black"))
    }
}

/// Error when parsing an invalid colour name.
#[derive(Clone, Debug)]
pub struct ParseColourError;

impl fmt::Display for ParseColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid colour")
    }
}

impl Error for ParseColourError {}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Colour, ParseColourError> {
        Ok(match s {
            "black" => Colour::Black,
            "white" => Colour::White,
            _ => return Err(ParseColourError),
        })
    }
}

/// Colour selector for area queries: a concrete colour or `Any`.
///
/// `Any` exists only as a query filter. It can never be the colour of a
/// stored piece, which is tagged with a plain [`Colour`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ColourFilter {
    White,
    Black,
    Any,
}

impl ColourFilter {
    /// Checks whether a concrete colour is selected by this filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::{Colour, ColourFilter};
    ///
    /// assert!(ColourFilter::Any.matches(Colour::Black));
    /// assert!(ColourFilter::White.matches(Colour::White));
    /// assert!(!ColourFilter::White.matches(Colour::Black));
    /// ```
    #[inline]
    pub const fn matches(self, colour: Colour) -> bool {
        match self {
            ColourFilter::White => matches!(colour, Colour::White),
            ColourFilter::Black => matches!(colour, Colour::Black),
            ColourFilter::Any => true,
        }
    }

    /// The concrete colour selected by this filter, or `None` for `Any`.
    #[inline]
    pub const fn as_colour(self) -> Option<Colour> {
        match self {
            ColourFilter::White => Some(Colour::White),
            ColourFilter::Black => Some(Colour::Black),
            ColourFilter::Any => None,
        }
    }
}

impl From<Colour> for ColourFilter {
    #[inline]
    fn from(colour: Colour) -> ColourFilter {
        colour.fold(ColourFilter::White, ColourFilter::Black)
    }
}

/// Error when [`ColourFilter::Any`] is passed to an operation that requires
/// a concrete colour.
#[derive(Clone, Debug)]
pub struct AmbiguousColourError;

impl fmt::Display for AmbiguousColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a concrete colour is required")
    }
}

impl Error for AmbiguousColourError {}

/// Container with values for each [`Colour`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByColour<T> {
    pub white: T,
    pub black: T,
}

impl<T> ByColour<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> ByColour<T>
    where
        F: FnMut(Colour) -> T,
    {
        ByColour {
            white: init(Colour::White),
            black: init(Colour::Black),
        }
    }

    #[inline]
    pub fn by_colour(&self, colour: Colour) -> &T {
        match colour {
            Colour::White => &self.white,
            Colour::Black => &self.black,
        }
    }

    #[inline]
    pub fn by_colour_mut(&mut self, colour: Colour) -> &mut T {
        match colour {
            Colour::White => &mut self.white,
            Colour::Black => &mut self.black,
        }
    }

    #[inline]
    pub fn into_colour(self, colour: Colour) -> T {
        match colour {
            Colour::White => self.white,
            Colour::Black => self.black,
        }
    }

    pub fn flip(&mut self) {
        mem::swap(&mut self.white, &mut self.black);
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> ByColour<U>
    where
        F: FnMut(T) -> U,
    {
        ByColour {
            white: f(self.white),
            black: f(self.black),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> ByColour<&T> {
        ByColour {
            white: &self.white,
            black: &self.black,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> ByColour<&mut T> {
        ByColour {
            white: &mut self.white,
            black: &mut self.black,
        }
    }

    pub fn iter(&self) -> std::array::IntoIter<&T, 2> {
        self.as_ref().into_iter()
    }
}

impl<T> IntoIterator for ByColour<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.white, self.black].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not() {
        assert_eq!(!Colour::White, Colour::Black);
        assert_eq!(!Colour::Black, Colour::White);
    }

    #[test]
    fn test_forward() {
        assert_eq!(Colour::White.forward(), Direction::Up);
        assert_eq!(Colour::Black.forward(), Direction::Down);
    }

    #[test]
    fn test_promotion_rank() {
        assert_eq!(Colour::White.promotion_rank(8), 7);
        assert_eq!(Colour::Black.promotion_rank(8), 0);
        assert_eq!(Colour::White.promotion_rank(5), 4);
    }

    #[test]
    fn test_parse() {
        assert_eq!("white".parse::<Colour>().unwrap(), Colour::White);
        assert_eq!("black".parse::<Colour>().unwrap(), Colour::Black);
        assert!("gray".parse::<Colour>().is_err());
        assert_eq!(Colour::from_char('w'), Some(Colour::White));
        assert_eq!(Colour::from_char('x'), None);
    }

    #[test]
    fn test_filter() {
        for colour in Colour::ALL {
            assert!(ColourFilter::Any.matches(colour));
            assert!(ColourFilter::from(colour).matches(colour));
            assert!(!ColourFilter::from(!colour).matches(colour));
            assert_eq!(ColourFilter::from(colour).as_colour(), Some(colour));
        }
        assert_eq!(ColourFilter::Any.as_colour(), None);
    }

    #[test]
    fn test_by_colour() {
        let mut counts = ByColour::new_with(|colour| colour.fold(1, 2));
        assert_eq!(*counts.by_colour(Colour::White), 1);
        assert_eq!(*counts.by_colour(Colour::Black), 2);

        counts.flip();
        assert_eq!(*counts.by_colour(Colour::White), 2);

        let doubled = counts.map(|n| n * 2);
        assert_eq!(doubled.into_colour(Colour::Black), 2);

        *counts.by_colour_mut(Colour::Black) += 10;
        assert_eq!(counts.black, 11);
        assert_eq!(counts.iter().copied().sum::<i32>(), 13);
    }
}
