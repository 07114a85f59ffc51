//! Parsing and printing the piece-placement field of FEN.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parses only the placement field; anything after the first whitespace
/// (side to move, castling, ...) is ignored. Control is left empty.
impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let field = s.split_whitespace().next().unwrap_or_default();
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount {
                found: ranks.len(),
            });
        }

        let mut board = Board::new();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Rank 8 comes first.
            let row = 7 - rank_index as i8;
            let mut col = 0usize;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece = Piece::from_fen_char(c)
                    .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let sq = Square::from_coords(row, col.min(8) as i8).ok_or(
                    PlacementError::BadRankLength {
                        rank_index,
                        length: col + 1,
                    },
                )?;
                board.set_piece_on(sq, piece);
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: col,
                });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Return the placement field describing this board.
    pub fn placement(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0u8..8).rev() {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                let piece = self.piece_on(Square::from_index_unchecked(row * 8 + col));
                if piece.is_empty() {
                    empty_count += 1;
                    continue;
                }
                if empty_count > 0 {
                    write!(f, "{empty_count}")?;
                    empty_count = 0;
                }
                write!(f, "{}", piece.fen_char())?;
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::Board;
    use crate::error::PlacementError;
    use crate::piece::Piece;
    use crate::square::Square;

    fn roundtrip(placement: &str) {
        let board: Board = placement.parse().unwrap();
        assert_eq!(board.placement(), placement, "placement roundtrip failed");
    }

    #[test]
    fn roundtrip_positions() {
        roundtrip(STARTING_PLACEMENT);
        roundtrip("8/8/8/8/8/8/8/8");
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8");
    }

    #[test]
    fn starting_position_matches_placement() {
        let parsed: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let board: Board = "8/8/8/8/4K3/8/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(board.piece_on(Square::E4), Piece::WHITE_KING);
        assert_eq!(board.occupied().count(), 1);
    }

    #[test]
    fn error_wrong_rank_count() {
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(PlacementError::WrongRankCount { found: 3 })
        );
        assert_eq!(
            "".parse::<Board>(),
            Err(PlacementError::WrongRankCount { found: 1 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR".parse::<Board>(),
            Err(PlacementError::InvalidPieceChar { character: 'X' })
        );
        assert!("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Board>().is_err());
    }

    #[test]
    fn error_bad_rank_length() {
        assert_eq!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Board>(),
            Err(PlacementError::BadRankLength {
                rank_index: 1,
                length: 7
            })
        );
        assert!("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse::<Board>().is_err());
        assert!("88/8/8/8/8/8/8/8".parse::<Board>().is_err());
    }
}
