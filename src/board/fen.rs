use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::state::FIRST_PLY;
use super::{
    Board, CastlingRights, Color, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

/// Largest fullmove number accepted from FEN. Larger values fall back to 1
/// so the ply counter keeps headroom for `make_move`.
const MAX_FULLMOVE: u32 = u32::MAX / (4 * FIRST_PLY);

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Piece placement and side to move are required. Castling and en
    /// passant fields may be missing, the halfmove clock is ignored, and a
    /// valid fullmove number sets the ply counter.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        board.parse_placement(parts[0])?;

        // Parse side to move
        let color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let mut castling = 0;
        if let Some(field) = parts.get(2).filter(|field| **field != "-") {
            for c in field.chars() {
                castling |=
                    CastlingRights::bit_for_char(c).ok_or(FenError::InvalidCastling { char: c })?;
            }
        }
        board.castling_rights = board.supported_castling(castling);

        // Parse en passant target
        if let Some(field) = parts.get(3).filter(|field| **field != "-") {
            board.en_passant_pawn = board.parse_en_passant(field, color)?;
        }

        // Fullmove number (optional, lenient)
        let fullmove = parts
            .get(5)
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| (1..=MAX_FULLMOVE).contains(n))
            .unwrap_or(1);
        board.ply_number = FIRST_PLY * fullmove + color.index() as u32;

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace this position with the one described by `fen`.
    ///
    /// On error the board is left untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Board::try_from_fen(fen)?;
        Ok(())
    }

    /// Convert the board position to FEN notation.
    ///
    /// Writes placement, side to move, castling rights and en passant
    /// target. The en passant pawn is normalized first, which is why this
    /// takes `&mut self`.
    pub fn to_fen(&mut self) -> String {
        self.normalize_en_passant();

        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep
        )
    }

    fn parse_placement(&mut self, placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut kings = [0usize; 2];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file,
                        });
                    }
                    continue;
                }

                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let sq = Square::at(rank, file as u8);
                match piece {
                    Piece::King => kings[color.index()] += 1,
                    Piece::Pawn if rank == 0 || rank == 7 => {
                        return Err(FenError::PawnOnBackRank { square: sq })
                    }
                    _ => {}
                }
                self.set_piece(sq, color, piece);
                file += 1;
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let found = kings[color.index()];
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }
        Ok(())
    }

    /// Castling bits whose king and rook are still on their home squares
    fn supported_castling(&self, bits: u8) -> CastlingRights {
        let mut kept = 0;
        for (bit, color, rook_file) in [
            (CASTLE_WHITE_K, Color::White, 7),
            (CASTLE_WHITE_Q, Color::White, 0),
            (CASTLE_BLACK_K, Color::Black, 7),
            (CASTLE_BLACK_Q, Color::Black, 0),
        ] {
            if bits & bit == 0 {
                continue;
            }
            let rank = color.back_rank();
            let king_home = self.piece_at(Square::at(rank, 4)) == Some((color, Piece::King));
            let rook_home = self.piece_at(Square::at(rank, rook_file)) == Some((color, Piece::Rook));
            if king_home && rook_home {
                kept |= bit;
            } else {
                debug!("dropping castling right {bit:#x}: king or rook not on home square");
            }
        }
        CastlingRights::from_bits(kept)
    }

    /// Square of the pawn that can be taken en passant, from the FEN target field
    fn parse_en_passant(&self, field: &str, color: Color) -> Result<Option<Square>, FenError> {
        let invalid = || FenError::InvalidEnPassant {
            found: field.to_string(),
        };
        let expected_rank = match color {
            Color::White => b'6',
            Color::Black => b'3',
        };
        let file = match field.as_bytes() {
            &[file @ b'a'..=b'h'] => file - b'a',
            &[file @ b'a'..=b'h', rank] if rank == expected_rank => file - b'a',
            _ => return Err(invalid()),
        };

        let pawn = Square::at(color.opponent().double_push_rank(), file);
        if self.piece_at(pawn) == Some((color.opponent(), Piece::Pawn)) {
            Ok(Some(pawn))
        } else {
            debug!("ignoring en passant field {field}: no pawn on {pawn}");
            Ok(None)
        }
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
