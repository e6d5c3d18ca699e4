//! Move text parsing.
//!
//! Accepts SAN, long algebraic, UCI and the looser forms people type:
//! `Nf3`, `Ng1f3`, `Ng1-f3`, `g1f3`, `exd5`, `ed`, `cxd`, `RxB`, `b8=Q`,
//! `b7b8q`, `O-O`, `0-0-0`, `oo`. Capture marks, check marks and
//! annotation glyphs are skipped; whatever fields are present must all
//! match exactly one legal candidate.

use log::debug;

use super::error::MoveParseError;
use super::{file_to_char, rank_to_char, Board, Move, Piece};

const PIECE_CHARS: &[u8] = b"KQRBNP";

#[inline]
fn is_piece_char(c: u8) -> bool {
    PIECE_CHARS.contains(&c)
}

/// Fields extracted from move text. Unset fields match anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct MoveText {
    from_piece: Option<u8>,
    from_file: Option<u8>,
    from_rank: Option<u8>,
    to_piece: Option<u8>,
    to_file: Option<u8>,
    to_rank: Option<u8>,
    promotion: Option<u8>,
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    #[inline]
    fn peek(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    /// Consume and return the current byte if it satisfies `pred`
    #[inline]
    fn eat(&mut self, pred: impl Fn(u8) -> bool) -> Option<u8> {
        let c = self.peek();
        if c != 0 && pred(c) {
            self.pos += 1;
            Some(c)
        } else {
            None
        }
    }
}

/// Length and letter count of a castling token at the start of `bytes`.
///
/// Two or three identical letters from `O`, `o`, `0`, either all joined by
/// single hyphens or with none. Returns `(0, 0)` for anything else.
fn castling_prefix(bytes: &[u8]) -> (usize, usize) {
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
    let oh = at(0);
    let mut count = 0;
    let mut len = 0;
    if matches!(oh, b'O' | b'o' | b'0') {
        loop {
            count += 1;
            len += 1;
            if at(len) == b'-' {
                len += 1;
            }
            if at(len) != oh {
                break;
            }
        }
    }
    if len != count && len != 2 * count - 1 {
        return (0, 0);
    }
    (count, len)
}

/// Extract move fields, or `None` when the text does not look like a move.
fn scan(text: &str) -> Option<MoveText> {
    let mut cur = Cursor {
        bytes: text.as_bytes(),
        pos: 0,
    };
    while cur.peek().is_ascii_whitespace() {
        cur.pos += 1;
    }

    let mut fields = MoveText::default();
    let (letters, len) = castling_prefix(&cur.bytes[cur.pos..]);
    if letters == 2 || letters == 3 {
        fields.from_piece = Some(b'K');
        fields.from_file = Some(b'e');
        fields.to_file = Some(if letters == 2 { b'g' } else { b'c' });
        cur.pos += len;
    } else {
        let is_file = |c: u8| (b'a'..=b'h').contains(&c);
        let is_rank = |c: u8| (b'1'..=b'8').contains(&c);

        if let Some(piece) = cur.eat(is_piece_char) {
            fields.from_piece = Some(piece);
            cur.eat(|c| c == b'/');
        }

        fields.to_file = cur.eat(is_file);
        fields.to_rank = cur.eat(is_rank);

        match cur.peek() {
            b'x' | b':' => {
                cur.pos += 1;
                fields.to_piece = cur.eat(is_piece_char);
            }
            b'-' => cur.pos += 1,
            _ => {}
        }

        if let Some(file) = cur.eat(is_file) {
            fields.from_file = fields.to_file;
            fields.from_rank = fields.to_rank;
            fields.to_file = Some(file);
            fields.to_rank = None;
        }

        if let Some(rank) = cur.eat(is_rank) {
            if fields.to_rank.is_some() {
                fields.from_rank = fields.to_rank;
            }
            fields.to_rank = Some(rank);
        }

        cur.eat(|c| c == b'=');

        fields.promotion = cur
            .eat(|c| is_piece_char(c.to_ascii_uppercase()))
            .map(|c| c.to_ascii_uppercase());
    }

    while cur.eat(|c| matches!(c, b'+' | b'#' | b'!' | b'?')).is_some() {}

    let next = cur.peek();
    if next.is_ascii_alphanumeric() || next == b'-' || next == b'=' {
        return None;
    }

    if fields.from_piece.is_none() && fields.to_piece.is_none() && fields.promotion.is_none() {
        if fields.from_file.is_none() && fields.to_file.is_none() {
            return None;
        }
        if fields.from_rank.is_some() && fields.to_rank.is_none() {
            return None;
        }
        if fields.to_file.is_some() && fields.to_rank.is_none() && fields.from_file.is_none() {
            return None;
        }
    }

    Some(fields)
}

#[inline]
fn field_matches(field: Option<u8>, actual: Option<u8>) -> bool {
    field.is_none() || field == actual
}

impl Board {
    /// Find the legal move among `candidates` that `text` describes.
    ///
    /// `candidates` is normally the output of [`Board::generate_moves`] or
    /// [`Board::legal_moves`]. When several legal moves match, a pawn move
    /// beats a piece move and a queen promotion beats an under-promotion;
    /// a tie at the top is ambiguous.
    ///
    /// # Examples
    /// ```
    /// use chessmoves::board::{Board, MoveParseError};
    ///
    /// let mut board = Board::new();
    /// let moves = board.legal_moves();
    /// let mv = board.parse_move("e2-e4", moves.as_slice()).unwrap();
    /// assert_eq!(board.move_to_uci(mv), "e2e4");
    /// assert!(matches!(
    ///     board.parse_move("e5", moves.as_slice()),
    ///     Err(MoveParseError::IllegalMove { .. })
    /// ));
    /// ```
    pub fn parse_move(&mut self, text: &str, candidates: &[Move]) -> Result<Move, MoveParseError> {
        let Some(fields) = scan(text) else {
            debug!("rejecting move text {text:?}: invalid syntax");
            return Err(MoveParseError::InvalidSyntax {
                text: text.to_string(),
            });
        };

        let mut matches = 0;
        let mut matched = None;
        let mut precedence = -1;

        for &mv in candidates {
            let from = mv.from();
            let to = mv.to();
            let Some((_, piece)) = self.squares[from.index()] else {
                continue;
            };
            let promotion = self
                .is_promotion(from, to)
                .then(|| mv.promotion_piece().to_char() as u8);
            let captured = self.squares[to.index()].map(|(_, p)| p.to_char() as u8);

            if !field_matches(fields.from_piece, Some(piece.to_char() as u8))
                || !field_matches(fields.from_file, Some(file_to_char(from.file()) as u8))
                || !field_matches(fields.from_rank, Some(rank_to_char(from.rank()) as u8))
                || !field_matches(fields.to_piece, captured)
                || !field_matches(fields.to_file, Some(file_to_char(to.file()) as u8))
                || !field_matches(fields.to_rank, Some(rank_to_char(to.rank()) as u8))
                || !field_matches(fields.promotion, promotion)
                || !self.is_legal_move(mv)
            {
                continue;
            }

            let candidate_precedence = match (piece, promotion) {
                (Piece::Pawn, Some(b'Q')) => 2,
                (Piece::Pawn, _) => 1,
                _ => 0,
            };
            if precedence < candidate_precedence {
                matches = 0;
            }
            if precedence <= candidate_precedence {
                matched = Some(mv);
                precedence = candidate_precedence;
                matches += 1;
            }
        }

        match (matched, matches) {
            (Some(mv), 1) => Ok(mv),
            (None, _) => {
                debug!("rejecting move text {text:?}: no legal match");
                Err(MoveParseError::IllegalMove {
                    text: text.to_string(),
                })
            }
            _ => {
                debug!("rejecting move text {text:?}: {matches} legal matches");
                Err(MoveParseError::AmbiguousMove {
                    text: text.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_prefix() {
        assert_eq!(castling_prefix(b"O-O"), (2, 3));
        assert_eq!(castling_prefix(b"O-O-O"), (3, 5));
        assert_eq!(castling_prefix(b"OO"), (2, 2));
        assert_eq!(castling_prefix(b"000"), (3, 3));
        assert_eq!(castling_prefix(b"o-o+"), (2, 3));
        assert_eq!(castling_prefix(b"O--O"), (0, 0));
        assert_eq!(castling_prefix(b"O-O-"), (0, 0));
        assert_eq!(castling_prefix(b"oo-o"), (0, 0));
        assert_eq!(castling_prefix(b"e4"), (0, 0));
    }

    #[test]
    fn test_scan_fields() {
        let fields = scan("Ng1-f3").unwrap();
        assert_eq!(fields.from_piece, Some(b'N'));
        assert_eq!(fields.from_file, Some(b'g'));
        assert_eq!(fields.from_rank, Some(b'1'));
        assert_eq!(fields.to_file, Some(b'f'));
        assert_eq!(fields.to_rank, Some(b'3'));

        let fields = scan("b7b8q").unwrap();
        assert_eq!(fields.from_file, Some(b'b'));
        assert_eq!(fields.from_rank, Some(b'7'));
        assert_eq!(fields.to_rank, Some(b'8'));
        assert_eq!(fields.promotion, Some(b'Q'));

        let fields = scan("RxB").unwrap();
        assert_eq!(fields.from_piece, Some(b'R'));
        assert_eq!(fields.to_piece, Some(b'B'));

        let fields = scan("  exd5+!?").unwrap();
        assert_eq!(fields.from_file, Some(b'e'));
        assert_eq!(fields.to_file, Some(b'd'));
        assert_eq!(fields.to_rank, Some(b'5'));
    }

    #[test]
    fn test_scan_rejects_garbage() {
        for text in ["", "foo", "123", "abc", "Ae2", "b", "78", "8", "7b", "b8=A", "bKe", "O-O-0"] {
            assert!(scan(text).is_none(), "{text:?} should be rejected");
        }
    }
}
