use super::super::geometry::knight_jumps;
use super::super::{Board, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for to in knight_jumps(from) {
            if self.is_enterable(to) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
