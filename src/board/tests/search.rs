//! Search tests.

use crate::board::search::{DRAW_SCORE, MATE_SCORE};
use crate::board::{
    find_best_move, negamax, Game, GameContext, GameStatus, Position, SearchError, SearchParams,
    SearchStats,
};

use super::random_playout;

fn best(fen: &str, depth: u32) -> Result<(String, i32), SearchError> {
    let game = Game::from_fen(fen);
    let result = find_best_move(&game.position, &game.context, &SearchParams::with_depth(depth))?;
    Ok((result.best_move.to_string(), result.score))
}

#[test]
fn start_position_depth_one() {
    let position = Position::new();
    let ctx = GameContext::starting();
    let result = find_best_move(&position, &ctx, &SearchParams::with_depth(1)).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.best_move.to_string(), "a2a3");
    assert!(position
        .generate_legal_moves(&ctx)
        .unwrap()
        .contains(result.best_move));
}

#[test]
fn start_position_depth_two_counts_nodes() {
    let result = find_best_move(
        &Position::new(),
        &GameContext::starting(),
        &SearchParams::with_depth(2),
    )
    .unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.stats.nodes, 20 + 400);
}

#[test]
fn rook_takes_free_queen() {
    for depth in 1..=3 {
        let (mv, score) = best("7k/3q4/8/8/8/8/8/3R2K1 w - - 0 1", depth).unwrap();
        assert_eq!(mv, "d1d7", "depth {depth}");
        // rook against bare king once the queen is gone
        assert_eq!(score, 500, "depth {depth}");
    }
}

#[test]
fn finds_mate_in_one() {
    let (mv, score) = best("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 2).unwrap();
    assert_eq!(mv, "e1e8");
    assert_eq!(score, MATE_SCORE + 1);
}

#[test]
fn mated_side_scores_a_loss() {
    let game = Game::from_fen("4Q1k1/5ppp/8/8/8/8/8/7K b - - 0 1");
    let mut stats = SearchStats::default();
    let score = negamax(&game.position, &game.context, 2, &mut stats).unwrap();
    assert_eq!(score, -(MATE_SCORE + 2));
    assert_eq!(stats.nodes, 1);
}

#[test]
fn stalemate_scores_a_draw() {
    let game = Game::from_fen("k7/8/1Q6/8/8/8/8/2K5 b - - 0 1");
    let mut stats = SearchStats::default();
    assert_eq!(
        negamax(&game.position, &game.context, 3, &mut stats),
        Ok(DRAW_SCORE)
    );
}

#[test]
fn root_without_moves_is_an_error() {
    assert_eq!(
        best("k7/8/1Q6/8/8/8/8/2K5 b - - 0 1", 2),
        Err(SearchError::NoLegalMoves {
            status: GameStatus::Stalemate
        })
    );
    assert_eq!(
        best("4Q1k1/5ppp/8/8/8/8/8/7K b - - 0 1", 2),
        Err(SearchError::NoLegalMoves {
            status: GameStatus::Checkmate
        })
    );
}

#[test]
fn negamax_is_color_symmetric() {
    let position = Position::new();
    let white = GameContext::starting();
    let black = white.flipped();
    for depth in 0..=2 {
        let mut stats = SearchStats::default();
        let as_white = negamax(&position, &white, depth, &mut stats).unwrap();
        let as_black = negamax(&position.flip_colors(), &black, depth, &mut stats).unwrap();
        assert_eq!(as_white, as_black, "depth {depth}");
    }

    for seed in 0..6 {
        let (position, ctx) = random_playout(seed, 16);
        let mut stats = SearchStats::default();
        let direct = negamax(&position, &ctx, 2, &mut stats).unwrap();
        let mirrored = negamax(&position.flip_colors(), &ctx.flipped(), 2, &mut stats).unwrap();
        assert_eq!(direct, mirrored, "seed {seed}");
    }
}
