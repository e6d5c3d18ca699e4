use super::super::geometry::king_steps;
use super::super::{Board, Move, MoveList, Square};

impl Board {
    /// Plain king steps. Unlike other pieces, squares the enemy attacks
    /// are skipped here.
    pub(crate) fn generate_king_steps(&self, from: Square, moves: &mut MoveList) {
        let enemy = &self.sides[self.side_to_move().opponent().index()];
        for to in king_steps(from) {
            if self.is_enterable(to) && !enemy.attacks[to.index()] {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Castling moves: the right is held, the squares between king and rook
    /// are empty, the king is not in check and does not pass through or
    /// land on an attacked square.
    pub(crate) fn generate_castling(&self, moves: &mut MoveList) {
        let color = self.side_to_move();
        if self.castling_rights.is_empty() || self.in_check() {
            return;
        }
        let enemy = &self.sides[color.opponent().index()];
        let rank = color.back_rank();
        let free = |files: &[u8]| {
            files
                .iter()
                .all(|&file| self.squares[Square::at(rank, file).index()].is_none())
        };
        let safe = |files: &[u8]| {
            files
                .iter()
                .all(|&file| !enemy.attacks[Square::at(rank, file).index()])
        };

        let king = Square::at(rank, 4);
        if self.castling_rights.has(color, true) && free(&[5, 6]) && safe(&[5, 6]) {
            moves.push(Move::special(king, Square::at(rank, 6)));
        }
        if self.castling_rights.has(color, false) && free(&[3, 2, 1]) && safe(&[3, 2]) {
            moves.push(Move::special(king, Square::at(rank, 2)));
        }
    }
}
