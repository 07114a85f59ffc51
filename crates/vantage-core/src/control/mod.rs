//! Square control: which pieces cover which squares, and the per-side tallies.
//!
//! A recompute walks the board once, marks every square each piece covers,
//! then counts each square's controllers by side. The result is built in a
//! fresh [`ControlMap`] and only then swapped into the board.

mod rays;

use tracing::{debug, trace, warn};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

use self::rays::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL, cast_ray, leap};

/// Number of black and white pieces controlling a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControlCount {
    pub black: u32,
    pub white: u32,
}

impl ControlCount {
    /// Return the tally for `side` (always 0 for [`Side::None`]).
    #[inline]
    pub const fn for_side(self, side: Side) -> u32 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
            Side::None => 0,
        }
    }

    /// Return the combined tally of both sides.
    #[inline]
    pub const fn total(self) -> u32 {
        self.black + self.white
    }
}

/// Control annotations for every square.
///
/// For each square this holds the squares whose pieces control it (in marking
/// order), the per-side count of those controllers, and the set of squares
/// its own piece controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlMap {
    controllers: [Vec<Square>; Square::COUNT],
    counts: [ControlCount; Square::COUNT],
    controlled: [Bitboard; Square::COUNT],
}

impl Default for ControlMap {
    fn default() -> Self {
        ControlMap {
            controllers: std::array::from_fn(|_| Vec::new()),
            counts: [ControlCount::default(); Square::COUNT],
            controlled: [Bitboard::EMPTY; Square::COUNT],
        }
    }
}

impl ControlMap {
    /// Return the squares whose pieces control `sq`.
    #[inline]
    pub fn controllers(&self, sq: Square) -> &[Square] {
        &self.controllers[sq.index()]
    }

    /// Return the per-side controller count for `sq`.
    #[inline]
    pub fn count(&self, sq: Square) -> ControlCount {
        self.counts[sq.index()]
    }

    /// Return the squares controlled by the piece on `sq`, itself included.
    #[inline]
    pub fn controlled_from(&self, sq: Square) -> Bitboard {
        self.controlled[sq.index()]
    }

    /// Return how many squares the piece on `sq` controls, itself included.
    #[inline]
    pub fn reach(&self, sq: Square) -> u32 {
        self.controlled[sq.index()].count()
    }

    /// Return `true` if the piece on `origin` controls `target`.
    #[inline]
    pub fn is_controlled_by(&self, target: Square, origin: Square) -> bool {
        self.controlled[origin.index()].contains(target)
    }

    /// Return the total number of (controller, square) pairs.
    ///
    /// A square controlled by three pieces contributes three.
    pub fn len(&self) -> usize {
        self.controllers.iter().map(Vec::len).sum()
    }

    /// Return `true` if no square is controlled by anything.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn mark(&mut self, target: Square, origin: Square) {
        self.controllers[target.index()].push(origin);
        self.controlled[origin.index()] |= target.bitboard();
    }
}

/// Compute control annotations for `board` without touching it.
pub fn compute_control(board: &Board) -> ControlMap {
    let mut map = ControlMap::default();

    for (origin, piece) in board.squares() {
        if piece.is_empty() {
            continue;
        }
        map.mark(origin, origin);
        mark_from(board, origin, piece, |target| map.mark(target, origin));
        trace!(%origin, %piece, reach = map.reach(origin), "marked control");
    }

    tally(board, &mut map);
    map
}

/// Recompute control for `board` and replace its annotations in one step.
pub fn recompute_control(board: &mut Board) {
    let map = compute_control(board);
    debug!(pairs = map.len(), "recomputed control");
    board.install_control(map);
}

/// Return the squares the piece on `origin` controls, excluding `origin` itself.
///
/// Empty for an empty square and for a pawn.
pub fn attacks_from(board: &Board, origin: Square) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    mark_from(board, origin, board.piece_on(origin), |target| {
        attacks |= target.bitboard();
    });
    attacks
}

fn mark_from(board: &Board, origin: Square, piece: Piece, mut mark: impl FnMut(Square)) {
    let kind = piece.kind();
    match kind {
        PieceKind::Rook => {
            for dir in ORTHOGONAL {
                cast_ray(board, origin, kind, dir, &mut mark);
            }
        }
        PieceKind::Bishop => {
            for dir in DIAGONAL {
                cast_ray(board, origin, kind, dir, &mut mark);
            }
        }
        PieceKind::Queen | PieceKind::King => {
            for dir in ALL_DIRECTIONS {
                cast_ray(board, origin, kind, dir, &mut mark);
            }
        }
        PieceKind::Knight => leap(origin, mark),
        // Pawn capture squares are not modelled.
        PieceKind::Pawn | PieceKind::Empty => {}
    }
}

/// Count each square's controllers by the side currently standing on them.
fn tally(board: &Board, map: &mut ControlMap) {
    for sq in Square::all() {
        let mut count = ControlCount::default();
        for &controller in map.controllers(sq) {
            match board.piece_on(controller).side() {
                Side::Black => count.black += 1,
                Side::White => count.white += 1,
                Side::None => warn!(square = %sq, %controller, "controlling square is empty"),
            }
        }
        map.counts[sq.index()] = count;
    }
}
