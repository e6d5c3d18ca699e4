//! Error types for board setup, square and move text parsing.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string needs at least piece placement and side to move
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant field
    InvalidEnPassant { found: String },
    /// Piece placement does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
    /// Each side needs exactly one king
    KingCount { color: Color, found: usize },
    /// Pawn on the first or eighth rank
    PawnOnBackRank { square: Square },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Text does not look like a move
    InvalidSyntax { text: String },
    /// Text is a move, but no legal move matches it
    IllegalMove { text: String },
    /// Text matches more than one legal move
    AmbiguousMove { text: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidSyntax { text } => {
                write!(f, "Invalid move syntax '{text}'")
            }
            MoveParseError::IllegalMove { text } => write!(f, "Illegal move '{text}'"),
            MoveParseError::AmbiguousMove { text } => write!(f, "Ambiguous move '{text}'"),
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for an unknown notation name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    Unknown { name: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Unknown { name } => {
                write!(f, "Unknown notation '{name}', expected uci, san or long")
            }
        }
    }
}

impl std::error::Error for NotationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 1 };
        assert!(err.to_string().contains('1'));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let err = FenError::InvalidCastling { char: 'x' };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_fen_error_invalid_side() {
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_fen_error_king_count() {
        let err = FenError::KingCount {
            color: Color::Black,
            found: 0,
        };
        assert_eq!(err.to_string(), "Black must have exactly one king, found 0");
    }

    #[test]
    fn test_fen_error_pawn_square() {
        let err = FenError::PawnOnBackRank {
            square: "c8".parse().unwrap(),
        };
        assert!(err.to_string().contains("c8"));
    }

    #[test]
    fn test_move_errors_are_distinct() {
        let text = "Nc3".to_string();
        let syntax = MoveParseError::InvalidSyntax { text: text.clone() };
        let illegal = MoveParseError::IllegalMove { text: text.clone() };
        let ambiguous = MoveParseError::AmbiguousMove { text };
        assert_ne!(syntax, illegal);
        assert_ne!(illegal, ambiguous);
        assert!(syntax.to_string().starts_with("Invalid move syntax"));
        assert!(illegal.to_string().starts_with("Illegal move"));
        assert!(ambiguous.to_string().starts_with("Ambiguous move"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_notation_error() {
        let err = NotationError::Unknown {
            name: "pgn".to_string(),
        };
        assert!(err.to_string().contains("'pgn'"));
    }
}
