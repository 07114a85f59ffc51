//! The board: one piece per square plus the control annotations of the last recompute.

use std::fmt;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::control::{self, ControlCount, ControlMap};
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Back-rank order from the A file to the H file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of squares indexed by [`Square`].
///
/// Every square always holds exactly one [`Piece`]; unoccupied squares hold
/// [`Piece::EMPTY`]. The control annotations are only refreshed by
/// [`Board::recompute_control`], so after a move they describe the position
/// as it was at the last recompute.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; Square::COUNT],
    control: ControlMap,
}

impl Board {
    /// Number of rows on the board.
    pub const ROWS: i8 = Square::ROWS;

    /// Number of columns on the board.
    pub const COLUMNS: i8 = Square::COLUMNS;

    /// Return a board with every square empty and no control recorded.
    pub fn new() -> Board {
        Board {
            squares: [Piece::EMPTY; Square::COUNT],
            control: ControlMap::default(),
        }
    }

    /// Return a fresh board set up in the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::new();
        board.initialize_standard_position();
        board
    }

    /// Place both sides' pieces on their home rows.
    ///
    /// Only rows 0, 1, 6 and 7 are written; meant for a freshly created board.
    pub fn initialize_standard_position(&mut self) {
        for sq in Square::all() {
            let col = sq.col() as usize;
            let piece = match sq.row() {
                0 => Piece::new(BACK_RANK[col], Side::White),
                1 => Piece::WHITE_PAWN,
                6 => Piece::BLACK_PAWN,
                7 => Piece::new(BACK_RANK[col], Side::Black),
                _ => continue,
            };
            self.set_piece_on(sq, piece);
        }
    }

    /// Put `piece` on the square at (`row`, `col`), replacing whatever was there.
    pub fn place_piece(&mut self, row: i8, col: i8, piece: Piece) -> Result<(), BoardError> {
        let sq = Square::new(row, col)?;
        self.set_piece_on(sq, piece);
        Ok(())
    }

    /// Reset the square at (`row`, `col`) to empty.
    pub fn clear_square(&mut self, row: i8, col: i8) -> Result<(), BoardError> {
        self.place_piece(row, col, Piece::EMPTY)
    }

    /// Put `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn set_piece_on(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = piece;
    }

    /// Relocate the piece at the source square to the destination square.
    ///
    /// Whatever stood on the destination is overwritten and the source
    /// becomes empty. No chess rules are checked. On error nothing changes.
    pub fn move_piece(
        &mut self,
        src_row: i8,
        src_col: i8,
        dst_row: i8,
        dst_col: i8,
    ) -> Result<(), BoardError> {
        let src = Square::new(src_row, src_col)?;
        let dst = Square::new(dst_row, dst_col)?;
        self.relocate(src, dst)
    }

    /// Square-typed form of [`Board::move_piece`].
    pub fn relocate(&mut self, src: Square, dst: Square) -> Result<(), BoardError> {
        if src == dst {
            return Err(BoardError::InvalidMove { square: src });
        }

        let piece = self.piece_on(src);
        let replaced = self.piece_on(dst);
        self.set_piece_on(dst, piece);
        self.set_piece_on(src, Piece::EMPTY);

        debug!(%src, %dst, %piece, %replaced, "relocated piece");
        Ok(())
    }

    /// Return the piece at (`row`, `col`).
    pub fn piece_at(&self, row: i8, col: i8) -> Result<Piece, BoardError> {
        Ok(self.piece_on(Square::new(row, col)?))
    }

    /// Return the piece on `sq`.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.piece_on(sq).is_empty()
    }

    /// Return the set of occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.squares()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Iterate over every square and its piece in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().map(|sq| (sq, self.piece_on(sq)))
    }

    /// Call `visit` for every square and its piece in row-major order.
    pub fn for_each_square(&self, mut visit: impl FnMut(Square, Piece)) {
        for (sq, piece) in self.squares() {
            visit(sq, piece);
        }
    }

    /// Rebuild every square's control annotations from the current placement.
    pub fn recompute_control(&mut self) {
        control::recompute_control(self);
    }

    /// Replace the control annotations wholesale.
    #[inline]
    pub(crate) fn install_control(&mut self, control: ControlMap) {
        self.control = control;
    }

    /// Return the control annotations from the last recompute.
    #[inline]
    pub fn control(&self) -> &ControlMap {
        &self.control
    }

    /// Return how many black and white pieces control (`row`, `col`).
    pub fn control_count(&self, row: i8, col: i8) -> Result<ControlCount, BoardError> {
        Ok(self.control.count(Square::new(row, col)?))
    }

    /// Return the squares whose pieces control (`row`, `col`).
    pub fn controllers(&self, row: i8, col: i8) -> Result<&[Square], BoardError> {
        Ok(self.control.controllers(Square::new(row, col)?))
    }

    /// Return the squares controlled by the piece on (`row`, `col`), itself included.
    pub fn controlled_from(&self, row: i8, col: i8) -> Result<Bitboard, BoardError> {
        Ok(self.control.controlled_from(Square::new(row, col)?))
    }

    /// Return how many squares the piece on (`row`, `col`) controls, itself included.
    pub fn reach(&self, row: i8, col: i8) -> Result<u32, BoardError> {
        Ok(self.control.reach(Square::new(row, col)?))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}
