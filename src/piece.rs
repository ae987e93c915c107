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
    area::Bounded,
    board::Board,
    colour::Colour,
    coord::{Coordinate, Direction},
};

/// Piece kinds: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// Gets the piece kind from its English letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('K'), Some(PieceKind::King));
    /// assert_eq!(PieceKind::from_char('n'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<PieceKind> {
        match ch {
            'P' | 'p' => Some(PieceKind::Pawn),
            'N' | 'n' => Some(PieceKind::Knight),
            'B' | 'b' => Some(PieceKind::Bishop),
            'R' | 'r' => Some(PieceKind::Rook),
            'Q' | 'q' => Some(PieceKind::Queen),
            'K' | 'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Gets the lowercase English letter for the piece kind.
    pub const fn char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Gets the uppercase English letter for the piece kind.
    pub const fn upper_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// The conventional material value of the kind, in pawns.
    ///
    /// Kings are never captured in this model, so they count as 0 rather
    /// than as tradeable material.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::PieceKind;
    ///
    /// assert_eq!(PieceKind::Queen.point_value(), 9);
    /// assert_eq!(PieceKind::King.point_value(), 0);
    /// ```
    pub const fn point_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Gets a [`Piece`] of the given colour at the given position.
    #[inline]
    pub const fn of(self, colour: Colour, position: Coordinate) -> Piece {
        Piece::new(colour, self, position)
    }

    /// `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, and `King`, in this
    /// order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// The 8 knight offsets, clockwise starting from two-up-one-right.
const KNIGHT_OFFSETS: [Coordinate; 8] = [
    Coordinate::new(1, 2),
    Coordinate::new(2, 1),
    Coordinate::new(2, -1),
    Coordinate::new(1, -2),
    Coordinate::new(-1, -2),
    Coordinate::new(-2, -1),
    Coordinate::new(-2, 1),
    Coordinate::new(-1, 2),
];

const KING_OFFSETS: [Coordinate; 8] = [
    Direction::Up.unit(),
    Direction::Down.unit(),
    Direction::Left.unit(),
    Direction::Right.unit(),
    Direction::UpLeft.unit(),
    Direction::UpRight.unit(),
    Direction::DownLeft.unit(),
    Direction::DownRight.unit(),
];

/// A piece with colour, kind and position.
///
/// A piece is a plain value. While it is stored in a [`Board`] it can only
/// be inspected; relocation goes through
/// [`remove_piece`](crate::Area::remove_piece), [`Piece::move_to`] and
/// [`add_piece`](crate::Area::add_piece), which keeps the board's position
/// index consistent. Promotion replaces the variant in place: `kind` is a
/// public field, colour and position stay untouched.
///
/// # Examples
///
/// ```
/// use raychess::{Board, Colour, Coordinate, Piece, PieceKind};
///
/// let board = Board::new(8, 8);
/// let king = Piece::new(Colour::White, PieceKind::King, Coordinate::new(0, 0));
/// // Only 3 neighbours of a corner square are on the board.
/// assert_eq!(king.moves(&board).len(), 3);
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Piece {
    pub colour: Colour,
    pub kind: PieceKind,
    position: Coordinate,
    moved: bool,
}

impl Piece {
    /// Constructs a new piece. Pawns start with their two-square move
    /// available.
    #[inline]
    pub const fn new(colour: Colour, kind: PieceKind, position: Coordinate) -> Piece {
        Piece {
            colour,
            kind,
            position,
            moved: false,
        }
    }

    /// The square the piece currently stands on. For pieces in a capture
    /// area the stored coordinate is inert.
    #[inline]
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Relocates the piece. A pawn irreversibly loses its two-square move;
    /// for every other kind this is a plain relocation.
    pub fn move_to(&mut self, new_position: Coordinate) {
        self.position = new_position;
        if self.kind == PieceKind::Pawn {
            self.moved = true;
        }
    }

    /// The material value of the piece, in pawns.
    #[inline]
    pub const fn point_value(&self) -> i32 {
        self.kind.point_value()
    }

    /// The letter for the piece, uppercase for white.
    pub fn char(&self) -> char {
        self.colour
            .fold(self.kind.upper_char(), self.kind.char())
    }

    /// Whether this piece kind takes part in en passant at all. True for
    /// every pawn; the adjacency and timing conditions are resolved by the
    /// turn layer, not here.
    #[inline]
    pub const fn can_en_passant(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    /// Whether the piece is a pawn standing on its promotion rank.
    pub fn can_be_promoted(&self, board: &Board) -> bool {
        self.kind == PieceKind::Pawn
            && self.position.y == self.colour.promotion_rank(board.height())
    }

    /// Whether the piece is a pawn that still has its two-square move.
    #[inline]
    pub const fn can_move_two_squares(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn) && !self.moved
    }

    /// Generates the pseudo-legal destination squares of the piece on
    /// `board`, accounting for blocking and capture but not for check
    /// safety.
    ///
    /// Neither the piece nor the board is mutated. The order is
    /// deterministic, but callers should only rely on it for reproducible
    /// tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::{Board, Colour, Coordinate, Piece, PieceKind};
    ///
    /// let board = Board::new(8, 8);
    /// let pawn = Piece::new(Colour::White, PieceKind::Pawn, Coordinate::new(4, 1));
    /// assert_eq!(
    ///     pawn.moves(&board),
    ///     vec![Coordinate::new(4, 2), Coordinate::new(4, 3)],
    /// );
    /// ```
    pub fn moves(&self, board: &Board) -> Vec<Coordinate> {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(board),
            PieceKind::Knight => self.step_moves(board, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.sliding_moves(board, &Direction::DIAGONAL),
            PieceKind::Rook => self.sliding_moves(board, &Direction::ORTHOGONAL),
            PieceKind::Queen => self.sliding_moves(board, &Direction::ALL),
            PieceKind::King => self.step_moves(board, &KING_OFFSETS),
        }
    }

    /// Squares the piece threatens that are not part of [`Piece::moves`].
    ///
    /// Only pawns threaten squares they cannot step to: their two forward
    /// diagonals. The diagonals are filtered for bounds but not for
    /// occupancy; reconciling them against actual enemy pieces is the
    /// legality filter's job. Every other kind returns an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use raychess::{Board, Colour, Coordinate, Piece, PieceKind};
    ///
    /// let board = Board::new(8, 8);
    /// let pawn = Piece::new(Colour::White, PieceKind::Pawn, Coordinate::new(4, 1));
    /// assert_eq!(
    ///     pawn.attack_only_moves(&board),
    ///     vec![Coordinate::new(3, 2), Coordinate::new(5, 2)],
    /// );
    /// ```
    pub fn attack_only_moves(&self, board: &Board) -> Vec<Coordinate> {
        if self.kind != PieceKind::Pawn {
            return Vec::new();
        }

        let forward = self.colour.forward().unit();
        let mut moves = Vec::with_capacity(2);
        for dx in [-1, 1] {
            let target = self.position + forward + Coordinate::new(dx, 0);
            if board.is_within_bounds(target) {
                moves.push(target);
            }
        }
        moves
    }

    /// Fixed-offset moves for kings and knights: a candidate square is kept
    /// when it is on the board and empty or held by the enemy.
    fn step_moves(&self, board: &Board, offsets: &[Coordinate]) -> Vec<Coordinate> {
        let mut moves = Vec::with_capacity(offsets.len());
        for &offset in offsets {
            let target = self.position + offset;
            if board.is_within_bounds(target)
                && board
                    .piece_at(target)
                    .map_or(true, |occupant| occupant.colour != self.colour)
            {
                moves.push(target);
            }
        }
        moves
    }

    /// Ray moves for bishops, rooks and queens: walk each direction until
    /// leaving the board or hitting a piece. An enemy occupant is still a
    /// destination; any occupant ends the ray.
    fn sliding_moves(&self, board: &Board, directions: &[Direction]) -> Vec<Coordinate> {
        let mut moves = Vec::new();
        for &direction in directions {
            let mut target = self.position + direction;
            while board.is_within_bounds(target) {
                match board.piece_at(target) {
                    None => moves.push(target),
                    Some(occupant) => {
                        if occupant.colour != self.colour {
                            moves.push(target);
                        }
                        break;
                    }
                }
                target += direction;
            }
        }
        moves
    }

    /// Forward moves resolve in order: one square ahead, then the
    /// double-step while the pawn has not moved. Each square must be on the
    /// board and empty, and the first blocked square truncates the rest.
    fn pawn_moves(&self, board: &Board) -> Vec<Coordinate> {
        let forward = self.colour.forward().unit();
        let reach = if self.moved { 1 } else { 2 };

        let mut moves = Vec::with_capacity(2);
        for i in 1..=reach {
            let target = self.position + forward.scale(i);
            if board.is_within_bounds(target) && board.piece_at(target).is_none() {
                moves.push(target);
            } else {
                break;
            }
        }
        moves
    }
}
