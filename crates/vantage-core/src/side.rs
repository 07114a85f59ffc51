//! The side a piece belongs to.

use std::fmt;

/// Which side owns a piece. `None` only ever pairs with an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Side {
    #[default]
    None = 0,
    Black = 1,
    White = 2,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::None => write!(f, "none"),
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}
