//! Error types for board access and placement parsing.

use std::fmt;

use crate::square::Square;

/// Errors from coordinate-based board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A row or column lies outside `[0, 8)`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i8,
        /// Requested column.
        col: i8,
    },
    /// A relocation whose source and destination are the same square.
    #[error("cannot move a piece from {square} onto itself")]
    InvalidMove {
        /// The square named as both source and destination.
        square: Square,
    },
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            PlacementError::BadRankLength { rank_index, length } => {
                write!(
                    f,
                    "rank {rank_index} describes {length} squares, expected 8"
                )
            }
            PlacementError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

#[cfg(test)]
mod tests {
    use super::{BoardError, PlacementError};
    use crate::square::Square;

    #[test]
    fn board_error_display() {
        let err = BoardError::OutOfBounds { row: -1, col: 0 };
        assert_eq!(format!("{err}"), "square (-1, 0) is off the board");

        let err = BoardError::InvalidMove { square: Square::E4 };
        assert_eq!(format!("{err}"), "cannot move a piece from e4 onto itself");
    }

    #[test]
    fn placement_error_display() {
        let err = PlacementError::WrongRankCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 ranks in piece placement, found 7");

        let err = PlacementError::InvalidPieceChar { character: 'x' };
        assert_eq!(format!("{err}"), "invalid piece character: 'x'");
    }
}
