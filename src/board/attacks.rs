//! Attack map computation.

use super::geometry::{directions, king_steps, knight_jumps, ray, KING_DIRECTIONS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Rebuild both sides' attack maps and king squares from scratch.
    ///
    /// Marks the squares each piece attacks: king steps, knight jumps, pawn
    /// diagonals, and slider rays up to and including the first occupied
    /// square. Afterwards the maps are fresh for the current ply.
    pub fn recompute_attacks(&mut self) {
        for side in &mut self.sides {
            side.attacks = [false; 64];
        }

        for from in Square::all() {
            let Some((color, piece)) = self.squares[from.index()] else {
                continue;
            };
            let mut attacks = self.sides[color.index()].attacks;
            match piece {
                Piece::King => {
                    self.sides[color.index()].king = from;
                    for to in king_steps(from) {
                        attacks[to.index()] = true;
                    }
                }
                Piece::Knight => {
                    for to in knight_jumps(from) {
                        attacks[to.index()] = true;
                    }
                }
                Piece::Pawn => {
                    for to in pawn_captures(from, color) {
                        attacks[to.index()] = true;
                    }
                }
                Piece::Queen | Piece::Rook | Piece::Bishop => {
                    for dir in directions(piece.slide_directions() & KING_DIRECTIONS[from.index()]) {
                        for to in ray(from, dir) {
                            attacks[to.index()] = true;
                            if self.squares[to.index()].is_some() {
                                break;
                            }
                        }
                    }
                }
            }
            self.sides[color.index()].attacks = attacks;
        }

        self.sides_ply = Some(self.ply_number);
    }
}

/// Diagonal capture squares of a pawn of `color` on `from`
pub(crate) fn pawn_captures(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let forward = color.pawn_step();
    let west = (from.file() > 0).then(|| from.offset(forward - 1));
    let east = (from.file() < 7).then(|| from.offset(forward + 1));
    west.into_iter().chain(east)
}
