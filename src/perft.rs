//! Perft: count the leaf nodes of the legal move tree.

use crate::board::Board;

impl Board {
    /// Number of legal move sequences of length `depth` from this position.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        self.recompute_attacks();
        let moves = self.generate_moves();

        let mut nodes = 0;
        for mv in moves {
            if !self.is_legal_move(mv) {
                continue;
            }
            if depth == 1 {
                nodes += 1;
                continue;
            }
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }

    /// Perft split by root move, in UCI notation
    pub fn divide(&mut self, depth: usize) -> Vec<(String, u64)> {
        let mut results = Vec::new();
        if depth == 0 {
            return results;
        }
        for mv in self.legal_moves() {
            let uci = self.move_to_uci(mv);
            self.make_move(mv);
            let nodes = self.perft(depth - 1);
            self.undo_move();
            results.push((uci, nodes));
        }
        results
    }
}
