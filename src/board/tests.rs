use super::*;

#[test]
fn new_board_has_standard_starting_material() {
    let board = Board::new();
    assert_eq!(board.pieces(Piece::Pawn, Color::White).count_ones(), 8);
    assert_eq!(board.pieces(Piece::Pawn, Color::Black).count_ones(), 8);
    assert_eq!(board.occupied().count_ones(), 32);
    assert_eq!(board.side_to_move, Color::White);
    assert_eq!(
        board.castling_rights,
        CASTLE_WK | CASTLE_WQ | CASTLE_BK | CASTLE_BQ
    );
}

#[test]
fn new_board_has_no_overlapping_pieces() {
    assert!(Board::new().validate().is_ok());
}

#[test]
fn zobrist_matches_full_recompute() {
    let board = Board::new();
    assert_eq!(board.zobrist, board.compute_zobrist_full());
}

#[test]
fn king_square_finds_both_kings() {
    let board = Board::new();
    assert_eq!(board.king_square(Color::White).to_string(), "e1");
    assert_eq!(board.king_square(Color::Black).to_string(), "e8");
}

#[test]
fn empty_board_has_no_pieces() {
    let board = Board::new_empty();
    assert_eq!(board.occupied(), 0);
}

#[test]
fn repetition_count_starts_at_one_for_a_fresh_position() {
    let board = Board::new();
    assert_eq!(board.repetition_count(), 1);
    assert!(!board.is_threefold());
}

#[test]
fn opposite_toggles_color() {
    assert_eq!(Color::White.opposite(), Color::Black);
    assert_eq!(Color::Black.opposite(), Color::White);
    assert_eq!(!Color::White, Color::Black);
}

#[test]
fn piece_values_are_standard() {
    assert_eq!(Piece::Pawn.value(), 100);
    assert_eq!(Piece::Queen.value(), 900);
    assert_eq!(Piece::King.value(), 0);
}
