//! Reversible move application.
//!
//! `make_move` records the previous value of everything it changes in the
//! undo log, behind a sentinel; `undo_move` replays that log backwards.
//! Neither touches the attack maps.

use super::state::UndoEntry;
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Apply a move generated for this position.
    ///
    /// The kind of a special move is read from its origin rank: back rank
    /// means castling, the rank before promotion means promotion (or a
    /// double push that sets the en passant pawn), and the fifth rank
    /// from the mover's side means an en passant capture.
    pub fn make_move(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();

        self.undo_log.push(UndoEntry::Sentinel);

        if let Some(previous) = self.en_passant_pawn.take() {
            self.undo_log.push(UndoEntry::EnPassant(Some(previous)));
        }

        if mv.is_special() {
            match from.rank() {
                0 | 7 => self.move_castling_rook(to),
                1 | 6 => match self.squares[from.index()] {
                    Some((color, Piece::Pawn)) if from.rank() == color.pawn_start_rank() => {
                        self.undo_log.push(UndoEntry::EnPassant(None));
                        self.en_passant_pawn = Some(to);
                    }
                    Some((color, _)) => {
                        self.write_square(from, Some((color, mv.promotion_piece())));
                    }
                    None => {}
                },
                3 | 4 => {
                    let captured = Square::at(from.rank(), to.file());
                    self.write_square(captured, None);
                }
                _ => {}
            }
        }

        self.ply_number += 1;

        self.move_piece(from, to);

        let rights = self.castling_rights.after_move(from, to);
        if rights != self.castling_rights {
            self.undo_log
                .push(UndoEntry::CastlingRights(self.castling_rights));
            self.castling_rights = rights;
        }
    }

    /// Take back the most recent `make_move`.
    ///
    /// # Panics
    /// Panics if there is no move to undo.
    pub fn undo_move(&mut self) {
        loop {
            match self.undo_log.pop() {
                Some(UndoEntry::Sentinel) => break,
                Some(UndoEntry::Square { square, previous }) => {
                    self.squares[square.index()] = previous;
                }
                Some(UndoEntry::CastlingRights(previous)) => self.castling_rights = previous,
                Some(UndoEntry::EnPassant(previous)) => self.en_passant_pawn = previous,
                None => panic!("undo_move called without a matching make_move"),
            }
        }
        self.ply_number -= 1;
        if self.sides_ply.is_some_and(|ply| self.ply_number < ply) {
            self.sides_ply = None;
        }
    }

    /// Rook relocation that goes with a castling king move to `king_to`
    fn move_castling_rook(&mut self, king_to: Square) {
        let rank = king_to.rank();
        if king_to.file() == 6 {
            self.move_piece(Square::at(rank, 7), Square::at(rank, 5));
        } else {
            self.move_piece(Square::at(rank, 0), Square::at(rank, 3));
        }
    }

    fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.squares[from.index()];
        self.write_square(to, piece);
        self.write_square(from, None);
    }

    fn write_square(&mut self, square: Square, value: Option<(Color, Piece)>) {
        self.undo_log.push(UndoEntry::Square {
            square,
            previous: self.squares[square.index()],
        });
        self.squares[square.index()] = value;
    }
}
