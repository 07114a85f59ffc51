//! Ray and leaper geometry used by the control pass.

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A step of `(d_row, d_col)`.
pub(crate) type Direction = (i8, i8);

/// Up, down, left, right.
pub(crate) const ORTHOGONAL: [Direction; 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

pub(crate) const DIAGONAL: [Direction; 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

#[rustfmt::skip]
pub(crate) const ALL_DIRECTIONS: [Direction; 8] = [
    (1, 0), (-1, 0), (0, -1), (0, 1),
    (-1, -1), (1, 1), (1, -1), (-1, 1),
];

#[rustfmt::skip]
pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Step from `origin` along `dir`, passing each stepped-to square to `mark`.
///
/// The first occupied square is marked and ends the ray. A king's ray also
/// ends on the first empty square it marks.
pub(crate) fn cast_ray(
    board: &Board,
    origin: Square,
    mover: PieceKind,
    (d_row, d_col): Direction,
    mut mark: impl FnMut(Square),
) {
    let mut current = origin;
    while let Some(target) = current.offset(d_row, d_col) {
        mark(target);
        if board.is_occupied(target) || mover == PieceKind::King {
            break;
        }
        current = target;
    }
}

/// Pass every on-board knight offset from `origin` to `mark`, ignoring occupancy.
pub(crate) fn leap(origin: Square, mut mark: impl FnMut(Square)) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(target) = origin.offset(d_row, d_col) {
            mark(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Bitboard;
    use crate::piece::Piece;

    fn ray_set(board: &Board, origin: Square, mover: PieceKind, dir: Direction) -> Vec<Square> {
        let mut out = Vec::new();
        cast_ray(board, origin, mover, dir, |sq| out.push(sq));
        out
    }

    #[test]
    fn ray_runs_to_the_edge_on_an_empty_board() {
        let board = Board::new();
        let up = ray_set(&board, Square::E4, PieceKind::Rook, (1, 0));
        let labels: Vec<String> = up.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["e5", "e6", "e7", "e8"]);
    }

    #[test]
    fn ray_includes_first_blocker_only() {
        let mut board = Board::new();
        board.place_piece(5, 4, Piece::BLACK_PAWN).unwrap();
        board.place_piece(6, 4, Piece::BLACK_PAWN).unwrap();
        let up = ray_set(&board, Square::E4, PieceKind::Queen, (1, 0));
        let labels: Vec<String> = up.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["e5", "e6"]);
    }

    #[test]
    fn own_pieces_block_too() {
        let mut board = Board::new();
        board.place_piece(1, 1, Piece::WHITE_PAWN).unwrap();
        let diag = ray_set(&board, Square::A1, PieceKind::Bishop, (1, 1));
        assert_eq!(diag, [Square::new(1, 1).unwrap()]);
    }

    #[test]
    fn king_ray_stops_after_one_empty_square() {
        let board = Board::new();
        for dir in ALL_DIRECTIONS {
            assert_eq!(ray_set(&board, Square::E4, PieceKind::King, dir).len(), 1);
        }
    }

    #[test]
    fn ray_off_the_edge_marks_nothing() {
        let board = Board::new();
        assert!(ray_set(&board, Square::A1, PieceKind::Rook, (-1, 0)).is_empty());
        assert!(ray_set(&board, Square::H8, PieceKind::Bishop, (1, 1)).is_empty());
    }

    #[test]
    fn leap_counts() {
        let count = |sq: Square| {
            let mut n = 0;
            leap(sq, |_| n += 1);
            n
        };
        assert_eq!(count(Square::E4), 8);
        assert_eq!(count(Square::A1), 2);
        assert_eq!(count(Square::B1), 3);
    }

    #[test]
    fn leap_targets_from_a1() {
        let mut targets = Bitboard::EMPTY;
        leap(Square::A1, |sq| targets |= sq.bitboard());
        let expected: Bitboard = [Square::new(2, 1).unwrap(), Square::new(1, 2).unwrap()]
            .into_iter()
            .collect();
        assert_eq!(targets, expected);
    }
}
