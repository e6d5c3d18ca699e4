use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let forward = color.pawn_step();

        // Captures, east side first
        if from.file() < 7 {
            let to = from.offset(forward + 1);
            if self.holds_enemy(to, color) {
                self.push_pawn_move(from, to, moves);
            }
        }
        if from.file() > 0 {
            let to = from.offset(forward - 1);
            if self.holds_enemy(to, color) {
                self.push_pawn_move(from, to, moves);
            }
        }

        let to = from.offset(forward);
        if self.squares[to.index()].is_some() {
            return;
        }
        self.push_pawn_move(from, to, moves);

        if from.rank() == color.pawn_start_rank() {
            let to = to.offset(forward);
            if self.squares[to.index()].is_none() {
                moves.push(Move::new(from, to));
                if self.has_pawn_beside(to, color.opponent()) {
                    moves.mark_last_special();
                }
            }
        }
    }

    /// En passant captures onto the square behind the en passant pawn
    pub(crate) fn generate_en_passant(&self, moves: &mut MoveList) {
        let Some(ep) = self.en_passant_pawn else {
            return;
        };
        let color = self.side_to_move();
        let target = ep.offset(color.pawn_step());
        for from in neighbours_on_rank(ep) {
            if self.squares[from.index()] == Some((color, Piece::Pawn)) {
                moves.push(Move::special(from, target));
            }
        }
    }

    /// Push a pawn move, expanded into the four promotions on the last rank
    fn push_pawn_move(&self, from: Square, to: Square, moves: &mut MoveList) {
        if to.rank() == self.side_to_move().promotion_rank() {
            for piece in PROMOTION_PIECES {
                moves.push(Move::promotion(from, to, piece));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }

    #[inline]
    fn holds_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.squares[sq.index()], Some((c, _)) if c != color)
    }

    /// Whether a pawn of `color` stands on a file next to `sq`, same rank
    pub(crate) fn has_pawn_beside(&self, sq: Square, color: Color) -> bool {
        neighbours_on_rank(sq).any(|n| self.squares[n.index()] == Some((color, Piece::Pawn)))
    }
}

/// West and east neighbours of `sq` on its rank
fn neighbours_on_rank(sq: Square) -> impl Iterator<Item = Square> {
    let west = (sq.file() > 0).then(|| sq.offset(-1));
    let east = (sq.file() < 7).then(|| sq.offset(1));
    west.into_iter().chain(east)
}
