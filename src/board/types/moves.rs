//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PROMOTION_PIECES};
use super::square::Square;

const TO_MASK: u16 = 0x3F;
const FROM_SHIFT: u16 = 6;
const SPECIAL_FLAG: u16 = 1 << 12;
const PROMOTION_SHIFT: u16 = 13;

/// Compact 16-bit move.
///
/// Encoding:
/// - bits 0-5:   to square (0-63)
/// - bits 6-11:  from square (0-63)
/// - bit 12:     special flag (castling, promotion, en passant capture,
///   or a double push that leaves an en passant chance)
/// - bits 13-14: promotion selector (queen, rook, bishop, knight)
///
/// The kind of special move is not stored: it follows from the origin rank
/// and the piece on the origin square of the position the move was generated in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// A plain move with no special handling
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move(to.index() as u16 | ((from.index() as u16) << FROM_SHIFT))
    }

    /// A move flagged special: castling, en passant capture, or a double push
    /// that gives the opponent an en passant chance
    #[inline]
    #[must_use]
    pub const fn special(from: Square, to: Square) -> Self {
        Move(Move::new(from, to).0 | SPECIAL_FLAG)
    }

    /// A pawn promotion. Pieces other than queen, rook, bishop or knight
    /// promote to a queen.
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        let selector = match piece {
            Piece::Rook => 1,
            Piece::Bishop => 2,
            Piece::Knight => 3,
            _ => 0,
        };
        Move(Move::special(from, to).0 | (selector << PROMOTION_SHIFT))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index(((self.0 >> FROM_SHIFT) & TO_MASK) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index((self.0 & TO_MASK) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.0 & SPECIAL_FLAG != 0
    }

    /// The piece selected for promotion. Only meaningful when the move
    /// actually promotes, which depends on the position.
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Piece {
        PROMOTION_PIECES[(self.0 >> PROMOTION_SHIFT) as usize & 3]
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if self.is_special() {
            write!(f, " special={}", self.promotion_piece().to_char())?;
        }
        write!(f, ")")
    }
}

/// Room for any reachable position; the known maximum is 218 moves.
pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [Move(0); MAX_MOVES],
            len: 0,
        }
    }

    /// # Panics
    /// Panics when the list is full, which no chess position can cause.
    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Mark the most recently pushed move special
    #[inline]
    pub(crate) fn mark_last_special(&mut self) {
        if let Some(last) = self.moves[..self.len].last_mut() {
            last.0 |= SPECIAL_FLAG;
        }
    }

    /// Keep only the moves for which `keep` returns true
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            let mv = self.moves[i];
            if keep(mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_move_fields() {
        let mv = Move::new(sq("g1"), sq("f3"));
        assert_eq!(mv.from(), sq("g1"));
        assert_eq!(mv.to(), sq("f3"));
        assert!(!mv.is_special());
    }

    #[test]
    fn test_promotion_selector() {
        for piece in PROMOTION_PIECES {
            let mv = Move::promotion(sq("b7"), sq("b8"), piece);
            assert!(mv.is_special());
            assert_eq!(mv.promotion_piece(), piece);
            assert_eq!(mv.from(), sq("b7"));
            assert_eq!(mv.to(), sq("b8"));
        }
    }

    #[test]
    fn test_special_and_plain_differ() {
        let plain = Move::new(sq("e1"), sq("g1"));
        let castle = Move::special(sq("e1"), sq("g1"));
        assert_ne!(plain, castle);
        assert_eq!(Move::promotion(sq("a7"), sq("a8"), Piece::Queen), Move::special(sq("a7"), sq("a8")));
    }

    #[test]
    fn test_move_list_retain_and_mark() {
        let mut list = MoveList::new();
        list.push(Move::new(sq("e2"), sq("e3")));
        list.push(Move::new(sq("e2"), sq("e4")));
        list.mark_last_special();
        assert!(list[1].is_special());
        list.retain(|mv| mv.to() == sq("e4"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], Move::special(sq("e2"), sq("e4")));
    }
}
