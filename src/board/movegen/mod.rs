//! Pseudo-legal move generation.
//!
//! Moves come out in board-scan order (ascending origin square, then each
//! piece's direction order), followed by castling and en passant captures.
//! Except for king steps and castling, the mover's own king may be left in
//! check: filter with [`Board::is_legal_move`].

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, MoveList, Piece, Square};

impl Board {
    /// Generate all pseudo-legal moves for the side to move.
    ///
    /// # Panics
    /// Panics when the attack maps are stale; call
    /// [`Board::recompute_attacks`] first.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        self.assert_fresh_sides();
        let mut moves = MoveList::new();
        let color = self.side_to_move();

        for from in Square::all() {
            match self.squares[from.index()] {
                Some((c, piece)) if c == color => match piece {
                    Piece::King => self.generate_king_steps(from, &mut moves),
                    Piece::Knight => self.generate_knight_moves(from, &mut moves),
                    Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                    Piece::Queen | Piece::Rook | Piece::Bishop => {
                        self.generate_slides(from, piece.slide_directions(), &mut moves);
                    }
                },
                _ => {}
            }
        }

        self.generate_castling(&mut moves);
        self.generate_en_passant(&mut moves);
        moves
    }

    /// True if `sq` is empty or holds an enemy piece
    #[inline]
    pub(crate) fn is_enterable(&self, sq: Square) -> bool {
        match self.squares[sq.index()] {
            Some((color, _)) => color != self.side_to_move(),
            None => true,
        }
    }
}
