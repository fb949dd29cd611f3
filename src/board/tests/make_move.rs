//! Move application tests.

use crate::board::{Color, Game, Move, MoveError, Piece, Square};

use super::random_playout;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn playouts_keep_board_invariants() {
    for seed in 0..30 {
        let (position, _) = random_playout(seed, 60);
        assert_eq!(position.validate(), Ok(()), "seed {seed}");
    }
}

#[test]
fn capture_removes_exactly_one_enemy_piece() {
    let mut game = Game::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let before = game.position.occupied_by(Color::Black).count();
    game.play(Move::new(sq("d1"), sq("d5"), Piece::Rook, Color::White))
        .unwrap();
    assert_eq!(game.position.occupied_by(Color::Black).count(), before - 1);
    assert!(game.position.pieces(Color::Black, Piece::Queen).is_empty());
    assert_eq!(game.halfmove_clock, 0);
}

#[test]
fn wrong_color_move_is_rejected() {
    let mut position = Game::new().position;
    let err = position
        .apply_move(Move::new(sq("e2"), sq("e4"), Piece::Pawn, Color::Black))
        .unwrap_err();
    assert!(matches!(err, MoveError::OriginNotOccupied { .. }));
    assert!(err.to_string().contains("no Black pawn on e2"));
}

#[test]
fn game_play_refuses_bad_move_without_side_effects() {
    let mut game = Game::new();
    let before = game;
    let bad = Move::new(sq("d1"), sq("d2"), Piece::Queen, Color::White);
    assert_eq!(game.play(bad), Err(MoveError::SelfCapture { mv: bad }));
    assert_eq!(game, before);
}

#[test]
fn game_play_refuses_move_for_side_not_on_move() {
    let mut game = Game::new();
    let before = game;
    let reply = Move::new(sq("e7"), sq("e5"), Piece::Pawn, Color::Black);
    let err = game.play(reply).unwrap_err();
    assert_eq!(err, MoveError::WrongSide { mv: reply });
    assert!(err.to_string().contains("it is White's move"));
    assert_eq!(game, before);
    assert_eq!(game.to_fen(), crate::board::STARTING_FEN);
}
