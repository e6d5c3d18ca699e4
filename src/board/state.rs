use super::{CastlingRights, Color, Piece, Square};

/// Ply number of the first move with White to move (full move 1).
pub(crate) const FIRST_PLY: u32 = 2;

/// Derived attack data for one color.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Side {
    pub(crate) attacks: [bool; 64],
    pub(crate) king: Square,
}

impl Side {
    const fn empty() -> Self {
        Side {
            attacks: [false; 64],
            king: Square::A1,
        }
    }
}

/// One undo record. A move pushes a `Sentinel` followed by the previous value
/// of every field it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UndoEntry {
    Sentinel,
    Square {
        square: Square,
        previous: Option<(Color, Piece)>,
    },
    CastlingRights(CastlingRights),
    EnPassant(Option<Square>),
}

/// Chess position with reversible make/undo.
///
/// The attack maps in `sides` are derived data: they are only valid right
/// after [`Board::recompute_attacks`] and until the next make or undo takes
/// the ply counter below the ply they were computed at.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) castling_rights: CastlingRights,
    /// Square of the pawn that just made a double push with an en passant
    /// reply possible, if any.
    pub(crate) en_passant_pawn: Option<Square>,
    /// Parity gives the side to move, `ply_number / 2` the full move number.
    pub(crate) ply_number: u32,
    pub(crate) sides: [Side; 2],
    pub(crate) sides_ply: Option<u32>,
    pub(crate) undo_log: Vec<UndoEntry>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            board.set_piece(Square::at(0, file), Color::White, piece);
            board.set_piece(Square::at(7, file), Color::Black, piece);
            board.set_piece(Square::at(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::at(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            castling_rights: CastlingRights::none(),
            en_passant_pawn: None,
            ply_number: FIRST_PLY,
            sides: [Side::empty(), Side::empty()],
            sides_ply: None,
            undo_log: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    /// Piece and color on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Piece kind on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].map(|(_, piece)| piece)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.ply_number % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move() == Color::White
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square of a pawn that may be captured en passant on this move.
    ///
    /// This is only set after a double push next to an enemy pawn; it can
    /// still name a capture that turns out to be illegal. See
    /// [`Board::normalize_en_passant`].
    #[inline]
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<Square> {
        self.en_passant_pawn
    }

    /// The square passed over by the en passant pawn, as written in FEN
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_pawn.map(|pawn| {
            let rank = match self.side_to_move() {
                Color::White => 5,
                Color::Black => 2,
            };
            Square::at(rank, pawn.file())
        })
    }

    #[inline]
    #[must_use]
    pub fn ply_number(&self) -> u32 {
        self.ply_number
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.ply_number / 2
    }

    #[inline]
    pub(crate) fn sides_are_fresh(&self) -> bool {
        self.sides_ply == Some(self.ply_number)
    }

    /// # Panics
    /// Panics when the attack maps are stale.
    #[inline]
    #[track_caller]
    pub(crate) fn assert_fresh_sides(&self) {
        assert!(
            self.sides_are_fresh(),
            "attack maps are stale: call recompute_attacks() after make_move/undo_move"
        );
    }

    /// Square of `color`'s king. Requires fresh attack maps.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.assert_fresh_sides();
        self.sides[color.index()].king
    }

    /// Whether `color` attacks `sq`. Requires fresh attack maps.
    #[must_use]
    pub fn is_attacked_by(&self, sq: Square, color: Color) -> bool {
        self.assert_fresh_sides();
        self.sides[color.index()].attacks[sq.index()]
    }

    /// Number of moves that can currently be undone
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_log
            .iter()
            .filter(|entry| **entry == UndoEntry::Sentinel)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Positions compare equal when their pieces, castling rights, en passant
/// pawn and ply number match. Attack maps and undo history are ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.castling_rights == other.castling_rights
            && self.en_passant_pawn == other.en_passant_pawn
            && self.ply_number == other.ply_number
    }
}

impl Eq for Board {}
