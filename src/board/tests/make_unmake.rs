//! Make/undo move tests.

use crate::board::{Board, Color, Move, Piece, Square};
use rand::prelude::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn find_move(board: &mut Board, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    let (from, to) = (sq(from), sq(to));
    for &m in board.legal_moves().iter() {
        let promotes = board.is_promotion(from, to);
        if m.from() == from
            && m.to() == to
            && (!promotes || Some(m.promotion_piece()) == promotion)
        {
            return m;
        }
    }
    panic!("Expected move not found");
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.clone();
    let original_hash = board.hash();

    let mv = find_move(&mut board, "e5", "f6", None);
    assert!(mv.is_special());
    board.make_move(mv);
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.en_passant_pawn(), None);

    board.undo_move();
    assert_eq!(board, original);
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.en_passant_pawn(), Some(sq("f5")));
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original_hash = board.hash();

    let mv = find_move(&mut board, "a7", "a8", Some(Piece::Knight));
    board.make_move(mv);
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    assert_eq!(board.piece_at(sq("a7")), None);

    board.undo_move();
    assert_eq!(board.hash(), original_hash);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("a8")), None);
}

#[test]
fn test_castling_make_unmake() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let mut board = Board::from_fen(fen);
    let original = board.clone();

    let kingside = find_move(&mut board, "e1", "g1", None);
    assert!(kingside.is_special());
    board.make_move(kingside);
    assert_eq!(board.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq -");
    board.undo_move();
    assert_eq!(board, original);

    let queenside = find_move(&mut board, "e1", "c1", None);
    board.make_move(queenside);
    assert_eq!(board.to_fen(), "r3k2r/8/8/8/8/8/8/2KR3R b kq -");
    board.undo_move();
    assert_eq!(board, original);
}

#[test]
fn test_rook_capture_clears_both_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut board, "a1", "a8", None);
    board.make_move(mv);
    assert_eq!(board.castling_rights().to_string(), "Kk");
    board.undo_move();
    assert_eq!(board.castling_rights().to_string(), "KQkq");
}

#[test]
fn test_double_push_sets_en_passant_only_with_neighbour() {
    let mut board = Board::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
    let mv = find_move(&mut board, "e2", "e4", None);
    assert!(mv.is_special());
    board.make_move(mv);
    assert_eq!(board.en_passant_pawn(), Some(sq("e4")));
    assert_eq!(board.to_fen(), "4k3/8/8/8/3pP3/8/8/4K3 b - e3");

    let mut board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    let mv = find_move(&mut board, "e2", "e4", None);
    assert!(!mv.is_special());
    board.make_move(mv);
    assert_eq!(board.en_passant_pawn(), None);
    assert_eq!(board.to_fen(), "4k3/8/8/8/4P3/8/8/4K3 b - -");
}

#[test]
fn test_make_move_marks_attack_maps_stale() {
    let mut board = Board::new();
    board.recompute_attacks();
    assert!(board.sides_are_fresh());

    board.make_move(Move::new(sq("g1"), sq("f3")));
    assert!(!board.sides_are_fresh());
    board.recompute_attacks();
    assert!(board.sides_are_fresh());

    board.undo_move();
    assert!(!board.sides_are_fresh());
}

#[test]
#[should_panic(expected = "stale")]
fn test_generate_moves_with_stale_attacks_panics() {
    let mut board = Board::new();
    board.recompute_attacks();
    board.make_move(Move::new(sq("e2"), sq("e4")));
    let _ = board.generate_moves();
}

#[test]
#[should_panic]
fn test_undo_without_make_panics() {
    let mut board = Board::new();
    board.undo_move();
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial_moves = board.legal_moves();

    for &mv in initial_moves.iter() {
        board.make_move(mv);
        board.undo_move();
    }

    let after_moves = board.legal_moves();
    assert_eq!(initial_moves.as_slice(), after_moves.as_slice());
}

#[test]
fn test_random_walk_undo_restores_every_position() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut history: Vec<(Board, String)> = Vec::new();

    for _ in 0..60 {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        let snapshot = board.clone();
        let fen = board.clone().to_fen();
        history.push((snapshot, fen));
        board.make_move(mv);
    }

    while let Some((snapshot, fen)) = history.pop() {
        board.undo_move();
        assert_eq!(board, snapshot);
        assert_eq!(board.clone().to_fen(), fen);
    }
    assert_eq!(board.undo_depth(), 0);
}
