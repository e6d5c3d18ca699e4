//! Chess position and move library: FEN in and out, legal move
//! generation, move parsing and formatting in SAN, long algebraic and UCI,
//! and Zobrist hashing.

pub mod api;
pub mod board;
mod perft;
pub mod zobrist;

pub use api::Error;
pub use board::{Board, Color, Move, MoveList, Notation, Piece, Square};
