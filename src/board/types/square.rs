//! Square type: index 0..63 with a1=0, b1=1, ..., h8=63.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// File letter for a file index (0 = 'a')
#[inline]
pub(crate) const fn file_to_char(file: u8) -> char {
    (b'a' + file) as char
}

/// Rank digit for a rank index (0 = '1')
#[inline]
pub(crate) const fn rank_to_char(rank: u8) -> char {
    (b'1' + rank) as char
}

/// A square on the chess board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square::at(0, 0);
    pub const B1: Square = Square::at(0, 1);
    pub const C1: Square = Square::at(0, 2);
    pub const D1: Square = Square::at(0, 3);
    pub const E1: Square = Square::at(0, 4);
    pub const F1: Square = Square::at(0, 5);
    pub const G1: Square = Square::at(0, 6);
    pub const H1: Square = Square::at(0, 7);
    pub const A8: Square = Square::at(7, 0);
    pub const B8: Square = Square::at(7, 1);
    pub const C8: Square = Square::at(7, 2);
    pub const D8: Square = Square::at(7, 3);
    pub const E8: Square = Square::at(7, 4);
    pub const F8: Square = Square::at(7, 5);
    pub const G8: Square = Square::at(7, 6);
    pub const H8: Square = Square::at(7, 7);

    /// Create a square with bounds checking
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square::at(rank, file))
        } else {
            None
        }
    }

    /// Square at (rank, file); both must be below 8
    #[inline]
    #[must_use]
    pub(crate) const fn at(rank: u8, file: u8) -> Self {
        Square(rank * 8 + file)
    }

    /// Create a square from an index (0-63)
    ///
    /// # Panics
    /// Panics if `idx` is 64 or more.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        assert!(idx < 64, "square index out of range");
        Square(idx as u8)
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a raw index offset. Callers guarantee the target is on the board,
    /// normally by consulting the geometry masks first.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: i8) -> Self {
        Square((self.0 as i8 + delta) as u8)
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            file_to_char(self.file()),
            rank_to_char(self.rank())
        )
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        match s.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square::at(rank - b'1', file - b'a')),
            _ => Err(invalid()),
        }
    }
}
