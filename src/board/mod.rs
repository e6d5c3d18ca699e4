//! Chess board representation and move rules.
//!
//! A mailbox board with derived per-side attack maps, pseudo-legal move
//! generation, make/undo through an undo log, and legality checks by trial
//! make. Supports full chess rules including castling, en passant, and
//! promotions.
//!
//! # Example
//! ```
//! use chessmoves::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attacks;
mod error;
mod fen;
pub(crate) mod geometry;
mod legality;
mod make_unmake;
mod movegen;
mod notation;
mod parse;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, NotationError, SquareError};
pub use notation::{CheckMark, Notation};
pub use state::Board;
pub use types::{CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use types::{
    file_to_char, rank_to_char, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
    PROMOTION_PIECES,
};
