//! A piece value: kind plus side.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// What occupies a square. An unoccupied square holds [`Piece::EMPTY`].
///
/// Pieces carry no position of their own; the board decides where they are.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl Piece {
    /// The empty square marker: `(Empty, None)`.
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::Empty,
        side: Side::None,
    };

    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Side::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Side::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::White);
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::White);

    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Side::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Side::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::Black);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::Black);

    /// Create a piece from a kind and a side.
    ///
    /// An `Empty` kind or a `None` side collapses to [`Piece::EMPTY`], so a
    /// real piece always has a real side and vice versa.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        match (kind, side) {
            (PieceKind::Empty, _) | (_, Side::None) => Piece::EMPTY,
            _ => Piece { kind, side },
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    /// Return `true` if this is the empty marker.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.kind.is_empty()
    }

    /// Return the FEN letter: uppercase for White, lowercase for Black, `.` if empty.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind.symbol();
        match self.side {
            Side::White => base.to_ascii_uppercase(),
            Side::Black | Side::None => base,
        }
    }

    /// Parse a FEN letter. Uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::new(kind, side))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.side, self.kind)
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_prefix = match self.side {
            Side::White => 'W',
            Side::Black => 'B',
            Side::None => '-',
        };
        let kind_char = match self.kind {
            PieceKind::Empty => '-',
            kind => kind.symbol().to_ascii_uppercase(),
        };
        write!(f, "{side_prefix}{kind_char}")
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;

    #[test]
    fn new_keeps_real_pairs() {
        for side in [Side::Black, Side::White] {
            for kind in PieceKind::PIECES {
                let piece = Piece::new(kind, side);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.side(), side);
                assert!(!piece.is_empty());
            }
        }
    }

    #[test]
    fn new_normalizes_mismatched_pairs() {
        assert_eq!(Piece::new(PieceKind::Empty, Side::White), Piece::EMPTY);
        assert_eq!(Piece::new(PieceKind::Rook, Side::None), Piece::EMPTY);
        assert_eq!(Piece::default(), Piece::EMPTY);
        assert_eq!(Piece::EMPTY.side(), Side::None);
    }

    #[test]
    fn fen_char_case() {
        assert_eq!(Piece::WHITE_KING.fen_char(), 'K');
        assert_eq!(Piece::BLACK_KNIGHT.fen_char(), 'n');
        assert_eq!(Piece::EMPTY.fen_char(), '.');
        assert_eq!(Piece::from_fen_char('Q'), Some(Piece::WHITE_QUEEN));
        assert_eq!(Piece::from_fen_char('p'), Some(Piece::BLACK_PAWN));
        assert_eq!(Piece::from_fen_char('.'), None);
        assert_eq!(Piece::from_fen_char('Z'), None);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Piece::WHITE_ROOK), "white rook");
        assert_eq!(format!("{}", Piece::EMPTY), "empty");
        assert_eq!(format!("{:?}", Piece::BLACK_BISHOP), "BB");
        assert_eq!(format!("{:?}", Piece::EMPTY), "--");
    }
}
