use super::super::geometry::{directions, ray, KING_DIRECTIONS};
use super::super::{Board, Move, MoveList, Square};

impl Board {
    /// Slide along each direction in `dirs` until the edge or a piece;
    /// an enemy piece ends the ray with a capture.
    pub(crate) fn generate_slides(&self, from: Square, dirs: u8, moves: &mut MoveList) {
        for dir in directions(dirs & KING_DIRECTIONS[from.index()]) {
            for to in ray(from, dir) {
                match self.squares[to.index()] {
                    None => moves.push(Move::new(from, to)),
                    Some(_) => {
                        if self.is_enterable(to) {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
