//! Legality checks built on trial make/undo.

use super::{Board, Move, MoveList, Piece};

impl Board {
    /// Whether `mv`, a move generated for this position, leaves the mover's
    /// king unattacked.
    ///
    /// Makes the move, recomputes attacks, then undoes it. The position and
    /// the state of the attack maps are the same afterwards as before.
    pub fn is_legal_move(&mut self, mv: Move) -> bool {
        let saved_sides = self.sides;
        let saved_ply = self.sides_ply;
        let mover = self.side_to_move();

        self.make_move(mv);
        self.recompute_attacks();
        let king = self.sides[mover.index()].king;
        let legal = !self.sides[mover.opponent().index()].attacks[king.index()];
        self.undo_move();

        self.sides = saved_sides;
        self.sides_ply = saved_ply;
        legal
    }

    /// Whether the side to move is in check. Requires fresh attack maps.
    ///
    /// # Panics
    /// Panics when the attack maps are stale.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.assert_fresh_sides();
        let us = self.side_to_move();
        let king = self.sides[us.index()].king;
        self.sides[us.opponent().index()].attacks[king.index()]
    }

    /// All legal moves. Leaves the attack maps fresh.
    pub fn legal_moves(&mut self) -> MoveList {
        self.recompute_attacks();
        let mut moves = self.generate_moves();
        moves.retain(|mv| self.is_legal_move(mv));
        moves
    }

    /// Whether any generated move is legal. Requires fresh attack maps.
    pub(crate) fn has_legal_move(&mut self) -> bool {
        let moves = self.generate_moves();
        moves.iter().any(|&mv| self.is_legal_move(mv))
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.recompute_attacks();
        self.in_check() && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.recompute_attacks();
        !self.in_check() && !self.has_legal_move()
    }

    /// Clear the en passant pawn unless some en passant capture is legal.
    ///
    /// Called before FEN export and hashing so that a double push without a
    /// real reply does not show up. The change is not recorded in the undo log.
    pub fn normalize_en_passant(&mut self) {
        let Some(ep) = self.en_passant_pawn else {
            return;
        };
        let color = self.side_to_move();
        let target = ep.offset(color.pawn_step());
        let candidates = [
            (ep.file() > 0).then(|| ep.offset(-1)),
            (ep.file() < 7).then(|| ep.offset(1)),
        ];
        let capturable = candidates.into_iter().flatten().any(|from| {
            self.squares[from.index()] == Some((color, Piece::Pawn))
                && self.is_legal_move(Move::special(from, target))
        });
        if !capturable {
            self.en_passant_pawn = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Move, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pinned_piece_moves_are_illegal() {
        // Knight on c3 is pinned by the bishop on a5
        let mut board = Board::from_fen("4k3/8/8/b7/8/2N5/8/4K3 w - - 0 1");
        assert!(!board.is_legal_move(Move::new(sq("c3"), sq("d5"))));
        assert!(board.is_legal_move(Move::new(sq("e1"), sq("f1"))));
    }

    #[test]
    fn test_is_legal_move_keeps_attack_maps_fresh() {
        let mut board = Board::new();
        board.recompute_attacks();
        let moves = board.generate_moves();
        for &mv in moves.iter() {
            assert!(board.is_legal_move(mv));
        }
        assert!(!board.in_check());
    }

    #[test]
    fn test_in_check() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        board.recompute_attacks();
        assert!(board.in_check());
        let legal = board.legal_moves();
        assert!(legal.iter().all(|mv| mv.from() == sq("e1")));
        assert!(legal.iter().all(|mv| mv.to().rank() == 1));
    }

    #[test]
    fn test_stalemate() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!board.is_checkmate());
        assert!(board.is_stalemate());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_normalize_keeps_real_en_passant() {
        let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        board.normalize_en_passant();
        assert_eq!(board.en_passant_pawn(), Some(sq("d5")));
    }

    #[test]
    fn test_normalize_clears_pinned_en_passant() {
        // Capturing exd6 would expose the king on a5 to the rook on h5
        let mut board = Board::from_fen("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1");
        board.normalize_en_passant();
        assert_eq!(board.en_passant_pawn(), None);
    }
}
