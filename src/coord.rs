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

use std::{fmt, ops};

/// A discrete 2D board coordinate.
///
/// Follows chess conventions: the origin is the bottom left corner, so
/// `Coordinate::new(0, 0)` corresponds to A1. A coordinate is not tied to any
/// particular board. Arithmetic never clamps, and out-of-range values are
/// ordinary values until checked with
/// [`is_out_of_bounds`](Coordinate::is_out_of_bounds).
///
/// # Examples
///
/// ```
/// use raychess::{Coordinate, Direction};
///
/// let e4 = Coordinate::new(4, 3);
/// assert_eq!(e4 + Direction::Up, Coordinate::new(4, 4));
/// assert!(!e4.is_out_of_bounds(8, 8));
/// assert!((e4 + Coordinate::new(0, 5)).is_out_of_bounds(8, 8));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Constructs a new coordinate from its components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Checks whether the coordinate falls outside a `width` × `height`
    /// board.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::Coordinate;
    ///
    /// assert!(Coordinate::new(8, 0).is_out_of_bounds(8, 8));
    /// assert!(Coordinate::new(0, -1).is_out_of_bounds(8, 8));
    /// assert!(!Coordinate::new(7, 7).is_out_of_bounds(8, 8));
    /// ```
    #[inline]
    pub const fn is_out_of_bounds(self, width: i32, height: i32) -> bool {
        self.x < 0 || self.x >= width || self.y < 0 || self.y >= height
    }

    /// Scales both components by `k`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::{Coordinate, Direction};
    ///
    /// let up = Coordinate::from(Direction::Up);
    /// assert_eq!(up.scale(3), Coordinate::new(0, 3));
    /// ```
    #[must_use]
    #[inline]
    pub const fn scale(self, k: i32) -> Coordinate {
        Coordinate::new(self.x * k, self.y * k)
    }
}

impl ops::Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::AddAssign for Coordinate {
    #[inline]
    fn add_assign(&mut self, rhs: Coordinate) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl ops::Sub for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::SubAssign for Coordinate {
    #[inline]
    fn sub_assign(&mut self, rhs: Coordinate) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl ops::Add<Direction> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Direction) -> Coordinate {
        self + rhs.unit()
    }
}

impl ops::AddAssign<Direction> for Coordinate {
    #[inline]
    fn add_assign(&mut self, rhs: Direction) {
        *self += rhs.unit();
    }
}

impl ops::Sub<Direction> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, rhs: Direction) -> Coordinate {
        self - rhs.unit()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the 8 unit directions on a board.
///
/// `Up` points towards the higher ranks, the direction white pawns travel.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// The unit offset for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::{Coordinate, Direction};
    ///
    /// assert_eq!(Direction::Up.unit(), Coordinate::new(0, 1));
    /// assert_eq!(Direction::DownLeft.unit(), Coordinate::new(-1, -1));
    /// ```
    #[inline]
    pub const fn unit(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate::new(0, 1),
            Direction::Down => Coordinate::new(0, -1),
            Direction::Left => Coordinate::new(-1, 0),
            Direction::Right => Coordinate::new(1, 0),
            Direction::UpLeft => Coordinate::new(-1, 1),
            Direction::UpRight => Coordinate::new(1, 1),
            Direction::DownLeft => Coordinate::new(-1, -1),
            Direction::DownRight => Coordinate::new(1, -1),
        }
    }

    /// All 8 directions, orthogonals first.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The 4 orthogonal directions, the rays of a rook.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 4 diagonal directions, the rays of a bishop.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];
}

impl From<Direction> for Coordinate {
    #[inline]
    fn from(direction: Direction) -> Coordinate {
        direction.unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_units() {
        for direction in Direction::ALL {
            let unit = direction.unit();
            assert!(unit.x.abs() <= 1 && unit.y.abs() <= 1);
            assert_ne!(unit, Coordinate::new(0, 0));
        }
        assert_eq!(Direction::Up.unit(), Coordinate::new(0, 1));
        assert_eq!(Direction::Down.unit(), Coordinate::new(0, -1));
        assert_eq!(Direction::Left.unit(), Coordinate::new(-1, 0));
        assert_eq!(Direction::Right.unit(), Coordinate::new(1, 0));
        assert_eq!(Direction::UpRight.unit(), Coordinate::new(1, 1));
    }

    #[test]
    fn test_arithmetic() {
        let c = Coordinate::new(3, -2);
        assert_eq!(c + Coordinate::new(1, 2), Coordinate::new(4, 0));
        assert_eq!(c - Coordinate::new(3, -2), Coordinate::new(0, 0));
        assert_eq!(c.scale(-2), Coordinate::new(-6, 4));
        assert_eq!(c + Coordinate::default(), c);

        let mut d = c;
        d += Direction::UpLeft;
        d -= Coordinate::new(0, 1);
        assert_eq!(d, Coordinate::new(2, -2));
    }

    #[test]
    fn test_arithmetic_never_clamps() {
        let c = Coordinate::new(7, 7) + Direction::UpRight;
        assert_eq!(c, Coordinate::new(8, 8));
        assert!(c.is_out_of_bounds(8, 8));
        assert!(!c.is_out_of_bounds(9, 9));
    }

    #[test]
    fn test_out_of_bounds_edges() {
        assert!(!Coordinate::new(0, 0).is_out_of_bounds(8, 8));
        assert!(!Coordinate::new(7, 7).is_out_of_bounds(8, 8));
        assert!(Coordinate::new(-1, 0).is_out_of_bounds(8, 8));
        assert!(Coordinate::new(0, 8).is_out_of_bounds(8, 8));
        assert!(Coordinate::new(3, 0).is_out_of_bounds(3, 3));
    }
}
