//! Piece kinds, including the empty-square sentinel.

use std::fmt;

/// The kind of a piece, without side information.
///
/// `Empty` marks a square with no piece on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    Empty = 0,
    King = 1,
    Rook = 2,
    Bishop = 3,
    Queen = 4,
    Knight = 5,
    Pawn = 6,
}

impl PieceKind {
    /// Every kind that is an actual piece.
    pub const PIECES: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Return `true` for the empty sentinel.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }

    /// Return the lowercase FEN letter, or `.` for an empty square.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Empty => '.',
            PieceKind::King => 'k',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parse a FEN letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_symbol(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Empty => "empty",
            PieceKind::King => "king",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn symbol_roundtrip() {
        for kind in PieceKind::PIECES {
            let c = kind.symbol();
            assert_eq!(PieceKind::from_symbol(c), Some(kind));
            assert_eq!(PieceKind::from_symbol(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn empty_has_no_letter() {
        assert_eq!(PieceKind::Empty.symbol(), '.');
        assert_eq!(PieceKind::from_symbol('.'), None);
        assert_eq!(PieceKind::from_symbol('x'), None);
        assert!(PieceKind::Empty.is_empty());
        assert!(!PieceKind::Pawn.is_empty());
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", PieceKind::Empty), "empty");
        assert_eq!(format!("{}", PieceKind::Knight), "knight");
        assert_eq!(format!("{}", PieceKind::Queen), "queen");
    }
}
