//! Board squares addressed by (row, column).

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::BoardError;

/// A square on the 8x8 board, stored as `row * 8 + col`.
///
/// Row 0 is White's first rank and column 0 is the A file, so index 0 is a1
/// and index 63 is h8.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Number of rows (ranks).
    pub const ROWS: i8 = 8;

    /// Number of columns (files).
    pub const COLUMNS: i8 = 8;

    /// Create a square from signed coordinates.
    ///
    /// Anything outside `[0, 8) x [0, 8)` is reported as
    /// [`BoardError::OutOfBounds`].
    #[inline]
    pub const fn new(row: i8, col: i8) -> Result<Square, BoardError> {
        match Square::from_coords(row, col) {
            Some(sq) => Ok(sq),
            None => Err(BoardError::OutOfBounds { row, col }),
        }
    }

    /// Create a square from signed coordinates, returning `None` off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < Self::ROWS && col >= 0 && col < Self::COLUMNS {
            Some(Square((row * Self::COLUMNS + col) as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse an algebraic label such as "e4" (file letter, rank digit).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::from_coords((rank_byte - b'1') as i8, (file_byte - b'a') as i8)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0 = White's first rank).
    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Return the column (0 = the A file).
    #[inline]
    pub const fn col(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Step by `(d_row, d_col)`, returning `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        match (self.row().checked_add(d_row), self.col().checked_add(d_col)) {
            (Some(row), Some(col)) => Square::from_coords(row, col),
            _ => None,
        }
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in row-major order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named squares used by the standard layout and the tests.
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const A3: Square = Square(16);
    pub const C3: Square = Square(18);
    pub const E4: Square = Square(28);
    pub const E5: Square = Square(36);
    pub const E7: Square = Square(52);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col() as u8) as char;
        write!(f, "{file}{}", self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
