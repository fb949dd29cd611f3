//! Legality filter tests.

use crate::board::{Color, Game, GameStatus, Piece};

use super::random_playout;

#[test]
fn legal_moves_never_leave_king_in_check() {
    for seed in 0..20 {
        let (position, ctx) = random_playout(seed, 30);
        let side = ctx.side_to_move;
        for mv in position.generate_legal_moves(&ctx).unwrap() {
            let mut after = position;
            after.apply_move(mv).unwrap();
            assert!(!after.is_in_check(side), "seed {seed}: {mv} leaves {side} in check");
        }
    }
}

#[test]
fn legal_moves_are_the_safe_pseudo_moves() {
    let game = Game::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    let pseudo = game.position.pseudo_legal_moves(&game.context);
    let legal = game.position.generate_legal_moves(&game.context).unwrap();
    assert_eq!(pseudo.len(), 5);
    let names: Vec<String> = legal.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["e1f1", "e1d2"]);
}

#[test]
fn check_evasion_only() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/r3K2R w - - 0 1");
    assert!(game.position.is_in_check(Color::White));
    let legal = game.position.generate_legal_moves(&game.context).unwrap();
    assert!(legal.iter().all(|mv| mv.piece() == Piece::King));
    assert_eq!(legal.len(), 3);
}

#[test]
fn back_rank_mate_is_checkmate() {
    let game = Game::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(game.position.status(&game.context), Ok(GameStatus::Checkmate));
    assert!(game
        .position
        .generate_legal_moves(&game.context)
        .unwrap()
        .is_empty());
}

#[test]
fn cornered_king_is_stalemate() {
    let game = Game::from_fen("k7/8/1Q6/8/8/8/8/2K5 b - - 0 1");
    assert!(!game.position.is_in_check(Color::Black));
    assert_eq!(game.position.status(&game.context), Ok(GameStatus::Stalemate));
    assert!(GameStatus::Stalemate.is_terminal());
}

#[test]
fn legality_probe_does_not_mutate() {
    let (position, ctx) = random_playout(7, 12);
    let before = position;
    for mv in position.pseudo_legal_moves(&ctx) {
        let _ = position.is_move_legal(ctx.side_to_move, mv).unwrap();
    }
    assert_eq!(position, before);
}
