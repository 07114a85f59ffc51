//! Core board model and square-control computation.

mod bitboard;
mod board;
pub mod control;
mod error;
mod piece;
mod piece_kind;
mod placement;
mod side;
mod square;

pub use bitboard::Bitboard;
pub use board::Board;
pub use control::{ControlCount, ControlMap, attacks_from, compute_control, recompute_control};
pub use error::{BoardError, PlacementError};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use side::Side;
pub use square::Square;
