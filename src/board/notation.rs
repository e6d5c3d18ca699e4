//! Move rendering: UCI, long algebraic and Standard Algebraic Notation,
//! plus check and mate marks.
//!
//! # Examples
//! ```
//! use chessmoves::board::{Board, Notation};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! let mv = board.parse_move("Nf3", moves.as_slice()).unwrap();
//! assert_eq!(board.format_move(mv, Notation::San, moves.as_slice()), "Nf3");
//! assert_eq!(board.format_move(mv, Notation::Uci, moves.as_slice()), "g1f3");
//! assert_eq!(board.format_move(mv, Notation::Long, moves.as_slice()), "Ng1-f3");
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::NotationError;
use super::{file_to_char, rank_to_char, Board, Move, Piece, Square};

/// Output notation for moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// Origin and destination squares, lowercase promotion letter: `e7e8q`
    Uci,
    /// Standard Algebraic Notation: `exd8=Q+`
    #[default]
    San,
    /// Long algebraic: `Ng1-f3`, `e7xd8=Q+`
    Long,
}

impl FromStr for Notation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uci" => Ok(Notation::Uci),
            "san" => Ok(Notation::San),
            "long" => Ok(Notation::Long),
            other => Err(NotationError::Unknown {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Uci => write!(f, "uci"),
            Notation::San => write!(f, "san"),
            Notation::Long => write!(f, "long"),
        }
    }
}

/// Check status of the side to move, as appended to SAN
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckMark {
    None,
    Check,
    Mate,
}

impl CheckMark {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CheckMark::None => "",
            CheckMark::Check => "+",
            CheckMark::Mate => "#",
        }
    }
}

impl fmt::Display for CheckMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Board {
    /// Whether a move from `from` to `to` is a pawn reaching its last rank
    #[must_use]
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        match self.squares[from.index()] {
            Some((color, Piece::Pawn)) => to.rank() == color.promotion_rank(),
            _ => false,
        }
    }

    /// Whether `mv` is a castling move in this position
    #[must_use]
    pub fn is_castling(&self, mv: Move) -> bool {
        mv.is_special() && self.piece_on(mv.from()) == Some(Piece::King)
    }

    /// Castling token for `mv`, if it castles
    fn castling_text(&self, mv: Move) -> Option<&'static str> {
        if !self.is_castling(mv) {
            return None;
        }
        Some(if mv.to().file() == 6 { "O-O" } else { "O-O-O" })
    }

    /// Whether `mv` removes an enemy piece, en passant included
    fn is_capture(&self, mv: Move) -> bool {
        self.squares[mv.to().index()].is_some()
            || (mv.is_special()
                && self.piece_on(mv.from()) == Some(Piece::Pawn)
                && mv.from().file() != mv.to().file())
    }

    /// UCI notation: `e2e4`, `e7e8q`. Castling is the king's move, `e1g1`.
    #[must_use]
    pub fn move_to_uci(&self, mv: Move) -> String {
        let mut text = format!("{}{}", mv.from(), mv.to());
        if self.is_promotion(mv.from(), mv.to()) {
            text.push(mv.promotion_piece().to_char().to_ascii_lowercase());
        }
        text
    }

    /// Long algebraic notation without check mark: `Ng1-f3`, `e5xd6`, `b7-b8=Q`, `O-O`
    #[must_use]
    pub fn move_to_long_algebraic(&self, mv: Move) -> String {
        if let Some(castle) = self.castling_text(mv) {
            return castle.to_string();
        }
        let mut text = String::with_capacity(8);
        if let Some(piece) = self.piece_on(mv.from()).filter(|p| *p != Piece::Pawn) {
            text.push(piece.to_char());
        }
        text.push_str(&mv.from().to_string());
        text.push(if self.is_capture(mv) { 'x' } else { '-' });
        text.push_str(&mv.to().to_string());
        if self.is_promotion(mv.from(), mv.to()) {
            text.push('=');
            text.push(mv.promotion_piece().to_char());
        }
        text
    }

    /// Standard Algebraic Notation without check mark.
    ///
    /// Piece moves are disambiguated against the other legal moves in
    /// `candidates` that bring the same kind of piece to the same square:
    /// the origin file is added when it tells them apart, the origin rank
    /// when some other candidate shares the file, and both when needed.
    pub fn move_to_san(&mut self, mv: Move, candidates: &[Move]) -> String {
        if let Some(castle) = self.castling_text(mv) {
            return castle.to_string();
        }

        let from = mv.from();
        let to = mv.to();
        let mut san = String::with_capacity(8);

        let Some(moved) = self.squares[from.index()] else {
            return san;
        };

        if moved.1 == Piece::Pawn {
            if from.file() != to.file() {
                san.push(file_to_char(from.file()));
                san.push('x');
            }
            san.push_str(&to.to_string());
            if self.is_promotion(from, to) {
                san.push('=');
                san.push(mv.promotion_piece().to_char());
            }
            return san;
        }

        san.push(moved.1.to_char());

        // rank_signal: 1 for a rival on another rank, 2 for one on the same rank
        let mut rank_signal = 0u8;
        let mut same_file = false;
        for &other in candidates {
            if other.to() == to
                && other != mv
                && self.squares[other.from().index()] == Some(moved)
                && self.is_legal_move(other)
            {
                rank_signal |= if other.from().rank() == from.rank() { 2 } else { 1 };
                same_file |= other.from().file() == from.file();
            }
        }
        if rank_signal != u8::from(same_file) {
            san.push(file_to_char(from.file()));
        }
        if same_file {
            san.push(rank_to_char(from.rank()));
        }

        if self.squares[to.index()].is_some() {
            san.push('x');
        }
        san.push_str(&to.to_string());
        san
    }

    /// Check mark for the side to move: `Mate` when in check with no legal
    /// move, `Check` when in check otherwise. Typically called right after
    /// `make_move` and `recompute_attacks`.
    ///
    /// # Panics
    /// Panics when the attack maps are stale.
    pub fn check_mark(&mut self) -> CheckMark {
        if !self.in_check() {
            CheckMark::None
        } else if self.has_legal_move() {
            CheckMark::Check
        } else {
            CheckMark::Mate
        }
    }

    /// Check mark that `mv` would give. The position and the freshness of
    /// its attack maps are unchanged afterwards.
    pub fn check_mark_after(&mut self, mv: Move) -> CheckMark {
        let saved_sides = self.sides;
        let saved_ply = self.sides_ply;

        self.make_move(mv);
        self.recompute_attacks();
        let mark = self.check_mark();
        self.undo_move();

        self.sides = saved_sides;
        self.sides_ply = saved_ply;
        mark
    }

    /// SAN with check mark, e.g. `Qh4#`
    pub fn move_to_san_with_check(&mut self, mv: Move, candidates: &[Move]) -> String {
        let mark = self.check_mark_after(mv);
        let mut san = self.move_to_san(mv, candidates);
        san.push_str(mark.as_str());
        san
    }

    /// Render `mv` in the given notation. SAN and long algebraic carry a
    /// check mark; UCI does not.
    pub fn format_move(&mut self, mv: Move, notation: Notation, candidates: &[Move]) -> String {
        match notation {
            Notation::Uci => self.move_to_uci(mv),
            Notation::San => self.move_to_san_with_check(mv, candidates),
            Notation::Long => {
                let mark = self.check_mark_after(mv);
                let mut text = self.move_to_long_algebraic(mv);
                text.push_str(mark.as_str());
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_notation_from_str() {
        assert_eq!("uci".parse::<Notation>().unwrap(), Notation::Uci);
        assert_eq!("san".parse::<Notation>().unwrap(), Notation::San);
        assert_eq!("long".parse::<Notation>().unwrap(), Notation::Long);
        assert!("SAN".parse::<Notation>().is_err());
        assert_eq!(Notation::default(), Notation::San);
        assert_eq!(Notation::Long.to_string(), "long");
    }

    #[test]
    fn test_uci_promotion_letter() {
        let board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - -");
        let mv = Move::promotion(sq("b7"), sq("b8"), Piece::Knight);
        assert_eq!(board.move_to_uci(mv), "b7b8n");
        assert_eq!(board.move_to_long_algebraic(mv), "b7-b8=N");
    }

    #[test]
    fn test_long_algebraic_capture_and_castle() {
        let mut board =
            Board::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1");
        let moves = board.legal_moves();
        let ep = Move::special(sq("e5"), sq("d6"));
        assert!(moves.contains(ep));
        assert_eq!(board.move_to_long_algebraic(ep), "e5xd6");
        assert_eq!(board.move_to_long_algebraic(Move::new(sq("a1"), sq("a8"))), "Ra1xa8");
        assert_eq!(board.move_to_long_algebraic(Move::special(sq("e1"), sq("g1"))), "O-O");
        assert_eq!(board.move_to_long_algebraic(Move::special(sq("e1"), sq("c1"))), "O-O-O");
        assert_eq!(board.move_to_uci(Move::special(sq("e1"), sq("c1"))), "e1c1");
    }

    #[test]
    fn test_check_mark_after() {
        let mut board =
            Board::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2");
        let mate = Move::new(sq("d8"), sq("h4"));
        assert_eq!(board.check_mark_after(mate), CheckMark::Mate);
        let quiet = Move::new(sq("g8"), sq("f6"));
        assert_eq!(board.check_mark_after(quiet), CheckMark::None);
        let moves = board.legal_moves();
        assert_eq!(board.move_to_san_with_check(mate, moves.as_slice()), "Qh4#");
        assert_eq!(
            board.format_move(mate, Notation::Long, moves.as_slice()),
            "Qd8-h4#"
        );
    }

    #[test]
    fn test_formatting_keeps_attack_maps_fresh() {
        let mut board = Board::new();
        board.recompute_attacks();
        let moves = board.generate_moves();
        for notation in [Notation::San, Notation::Long, Notation::Uci] {
            for &mv in moves.as_slice() {
                board.format_move(mv, notation, moves.as_slice());
            }
        }
        assert!(board.sides_are_fresh());
        assert!(!board.in_check());
        assert_eq!(board.generate_moves().len(), moves.len());

        let mut stale = Board::new();
        let mv = stale.legal_moves()[0];
        stale.make_move(mv);
        stale.recompute_attacks();
        stale.undo_move();
        assert!(!stale.sides_are_fresh());
        stale.check_mark_after(mv);
        assert!(!stale.sides_are_fresh());
    }
}
