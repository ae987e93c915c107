//! Property-based tests over randomly populated boards.

use std::collections::HashMap;

use proptest::prelude::*;

use raychess::{
    Area, Board, Bounded, Colour, ColourFilter, Coordinate, Direction, Piece, PieceKind,
};

/// Strategy for a random board: a map keyed by position guarantees the
/// one-piece-per-square invariant by construction.
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::hash_map((0..8i32, 0..8i32), (0..6usize, any::<bool>()), 0..16).prop_map(
        |placements| {
            let mut board = Board::new(8, 8);
            for ((x, y), (kind, white)) in placements {
                let piece = Piece::new(
                    Colour::from_white(white),
                    PieceKind::ALL[kind],
                    Coordinate::new(x, y),
                );
                board.add_piece(piece);
            }
            board
        },
    )
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(&Direction::ALL[..])
}

proptest! {
    /// Property: every generated move of every piece is on the board.
    #[test]
    fn prop_moves_within_bounds(board in board_strategy()) {
        for colour in Colour::ALL {
            for piece in board.pieces(colour) {
                for target in piece.moves(&board) {
                    prop_assert!(board.is_within_bounds(target));
                }
                for target in piece.attack_only_moves(&board) {
                    prop_assert!(board.is_within_bounds(target));
                }
            }
        }
    }

    /// Property: no piece generates a move onto a friendly piece.
    #[test]
    fn prop_no_friendly_captures(board in board_strategy()) {
        for colour in Colour::ALL {
            for piece in board.pieces(colour) {
                for target in piece.moves(&board) {
                    if let Some(occupant) = board.piece_at(target) {
                        prop_assert_ne!(occupant.colour, piece.colour);
                    }
                }
            }
        }
    }

    /// Property: a pawn with any piece directly ahead has no forward moves.
    #[test]
    fn prop_blocked_pawn_stands_still(board in board_strategy()) {
        for colour in Colour::ALL {
            for piece in board.pieces(colour) {
                if piece.kind != PieceKind::Pawn {
                    continue;
                }
                let ahead = piece.position() + piece.colour.forward();
                if board.piece_at(ahead).is_some() {
                    prop_assert!(piece.moves(&board).is_empty());
                }
            }
        }
    }

    /// Property: every stored piece resolves through the position index to
    /// itself.
    #[test]
    fn prop_index_consistent(board in board_strategy()) {
        for colour in Colour::ALL {
            for piece in board.pieces(colour) {
                prop_assert_eq!(board.piece_at(piece.position()), Some(piece));
            }
        }
    }

    /// Property: removing a piece vacates exactly its square.
    #[test]
    fn prop_removal_vacates_square(board in board_strategy()) {
        let mut board = board;
        let occupied: Vec<Coordinate> = Colour::ALL
            .iter()
            .flat_map(|&colour| board.pieces(colour).iter().map(Piece::position).collect::<Vec<_>>())
            .collect();

        for position in occupied {
            let before = board.pieces(Colour::White).len() + board.pieces(Colour::Black).len();
            let removed = board.remove_piece(position, ColourFilter::Any);
            prop_assert!(removed.is_some());
            prop_assert!(board.piece_at(position).is_none());
            let after = board.pieces(Colour::White).len() + board.pieces(Colour::Black).len();
            prop_assert_eq!(after + 1, before);
        }
    }

    /// Property: a lone blocker k squares along a ray leaves the k-1 empty
    /// squares before it, the blocker's square only when it is an enemy,
    /// and nothing beyond.
    #[test]
    fn prop_sliding_blocker(
        direction in direction_strategy(),
        k in 1..=3i32,
        enemy in any::<bool>(),
    ) {
        let origin = Coordinate::new(3, 3);
        let ray = direction.unit();
        let blocker_at = origin + ray.scale(k);

        let queen = Piece::new(Colour::White, PieceKind::Queen, origin);
        let blocker_colour = if enemy { Colour::Black } else { Colour::White };
        let mut board = Board::new(8, 8);
        board.add_piece(PieceKind::Pawn.of(blocker_colour, blocker_at));

        let moves = queen.moves(&board);
        for i in 1..k {
            prop_assert!(moves.contains(&(origin + ray.scale(i))));
        }
        prop_assert_eq!(moves.contains(&blocker_at), enemy);
        for i in (k + 1)..8 {
            prop_assert!(!moves.contains(&(origin + ray.scale(i))));
        }
    }

    /// Property: sorting a capture area is ascending by point value and
    /// idempotent.
    #[test]
    fn prop_capture_sort(kinds in prop::collection::vec(0..6usize, 0..24)) {
        let mut area = raychess::CaptureArea::new();
        for (i, kind) in kinds.into_iter().enumerate() {
            area.add_piece(PieceKind::ALL[kind].of(Colour::White, Coordinate::new(i as i32, 0)));
        }

        area.sort_pieces();
        let once = area.pieces().to_vec();
        for pair in once.windows(2) {
            prop_assert!(pair[0].point_value() <= pair[1].point_value());
        }

        area.sort_pieces();
        prop_assert_eq!(area.pieces(), once.as_slice());
    }
}

/// Spot check that the strategy exercises the occupancy invariant the same
/// way callers must: one piece per square.
#[test]
fn strategy_respects_occupancy() {
    let mut seen: HashMap<Coordinate, ()> = HashMap::new();
    let board = Board::standard();
    for colour in Colour::ALL {
        for piece in board.pieces(colour) {
            assert!(seen.insert(piece.position(), ()).is_none());
        }
    }
}
