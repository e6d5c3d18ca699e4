//! String-level entry points: FEN and move text in, FEN and move text out.
//!
//! Every call parses its own position, so callers never see attack maps
//! or the undo log.
//!
//! # Example
//! ```
//! use chessmoves::api;
//! use chessmoves::board::Notation;
//!
//! let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let moves = api::moves(start, Notation::San).unwrap();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(
//!     moves["e4"],
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -"
//! );
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::board::{Board, FenError, MoveParseError, Notation, NotationError};

/// Error type for the string-level API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input is not a valid FEN position
    InvalidFen(FenError),
    /// Unknown notation name
    InvalidNotation(NotationError),
    /// Move text could not be resolved
    InvalidMove(MoveParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            Error::InvalidNotation(e) => write!(f, "Invalid notation: {e}"),
            Error::InvalidMove(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidFen(e) => Some(e),
            Error::InvalidNotation(e) => Some(e),
            Error::InvalidMove(e) => Some(e),
        }
    }
}

impl From<FenError> for Error {
    fn from(e: FenError) -> Self {
        Error::InvalidFen(e)
    }
}

impl From<NotationError> for Error {
    fn from(e: NotationError) -> Self {
        Error::InvalidNotation(e)
    }
}

impl From<MoveParseError> for Error {
    fn from(e: MoveParseError) -> Self {
        Error::InvalidMove(e)
    }
}

/// All legal moves of a position, mapped to the FEN each one leads to.
pub fn moves(fen: &str, notation: Notation) -> Result<BTreeMap<String, String>, Error> {
    let mut board = Board::try_from_fen(fen)?;
    let candidates = board.legal_moves();

    let mut result = BTreeMap::new();
    for &mv in candidates.iter() {
        let text = board.format_move(mv, notation, candidates.as_slice());
        board.make_move(mv);
        let new_fen = board.to_fen();
        board.undo_move();
        result.insert(text, new_fen);
    }
    Ok(result)
}

/// The normalized FEN of a position.
pub fn position(fen: &str) -> Result<String, Error> {
    let mut board = Board::try_from_fen(fen)?;
    Ok(board.to_fen())
}

/// Play one move given as text. Returns the move in `notation` and the
/// resulting FEN.
pub fn make_move(fen: &str, text: &str, notation: Notation) -> Result<(String, String), Error> {
    let mut board = Board::try_from_fen(fen)?;
    board.recompute_attacks();
    let candidates = board.generate_moves();
    let mv = board.parse_move(text, candidates.as_slice())?;

    let rendered = board.format_move(mv, notation, candidates.as_slice());
    board.make_move(mv);
    Ok((rendered, board.to_fen()))
}

/// Zobrist hash of a position.
pub fn hash(fen: &str) -> Result<u64, Error> {
    let mut board = Board::try_from_fen(fen)?;
    Ok(board.hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: Error = FenError::TooFewParts { found: 0 }.into();
        assert!(err.to_string().starts_with("Invalid FEN"));

        let err: Error = "pgn".parse::<Notation>().unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid notation"));

        let err: Error = MoveParseError::AmbiguousMove {
            text: "Nd2".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Ambiguous move 'Nd2'");
    }

    #[test]
    fn test_invalid_fen_is_reported() {
        assert!(matches!(position("garbage"), Err(Error::InvalidFen(_))));
        assert!(matches!(hash(""), Err(Error::InvalidFen(_))));
        assert!(matches!(
            moves("8/8/8/8/8/8/8/8 w - -", Notation::Uci),
            Err(Error::InvalidFen(_))
        ));
    }
}
