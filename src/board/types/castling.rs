//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Rights left after a move from `from` to `to`. Vacating or landing on
    /// a king or rook home square drops the rights tied to it.
    #[inline]
    #[must_use]
    pub(crate) const fn after_move(self, from: Square, to: Square) -> Self {
        CastlingRights(self.0 & !(clear_mask(from) | clear_mask(to)))
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Get the bit for a specific castling right
    #[inline]
    pub(crate) const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }

    /// Bit for a FEN castling letter
    pub(crate) const fn bit_for_char(c: char) -> Option<u8> {
        match c {
            'K' => Some(CASTLE_WHITE_K),
            'Q' => Some(CASTLE_WHITE_Q),
            'k' => Some(CASTLE_BLACK_K),
            'q' => Some(CASTLE_BLACK_Q),
            _ => None,
        }
    }

    #[inline]
    pub(crate) const fn from_bits(bits: u8) -> Self {
        CastlingRights(bits & ALL_CASTLING_RIGHTS)
    }
}

/// Rights lost when a piece leaves or lands on `square`
const fn clear_mask(square: Square) -> u8 {
    match square {
        Square::A1 => CASTLE_WHITE_Q,
        Square::E1 => CASTLE_WHITE_K | CASTLE_WHITE_Q,
        Square::H1 => CASTLE_WHITE_K,
        Square::A8 => CASTLE_BLACK_Q,
        Square::E8 => CASTLE_BLACK_K | CASTLE_BLACK_Q,
        Square::H8 => CASTLE_BLACK_K,
        _ => 0,
    }
}

impl fmt::Display for CastlingRights {
    /// FEN castling field: "KQkq" subset, or "-"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
