//! Fixed-depth negamax over the legal move tree.
//!
//! Every child node gets its own copy of the position; nothing is undone.
//! Leaves are scored with [`Position::evaluate_material`]. A node with no
//! legal moves is a loss for the side to move if it is in check (earlier
//! mates score worse) and a draw otherwise.

pub mod constants;
mod params;

use log::{debug, trace, warn};

use super::error::SearchError;
use super::state::Position;
use super::types::{GameContext, Move};

pub use constants::{DRAW_SCORE, INFINITY, MATE_SCORE};
pub use params::{SearchParams, DEFAULT_DEPTH};

/// Counters collected over one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root, leaves included
    pub nodes: u64,
}

/// Best root move, its score for the side to move, and search counters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub stats: SearchStats,
}

/// Score of `position` for the side to move in `ctx`, searched `depth`
/// plies deep.
///
/// # Errors
/// Returns [`SearchError::Move`] if a generated move cannot be applied,
/// which only happens on a corrupt position.
pub fn negamax(
    position: &Position,
    ctx: &GameContext,
    depth: u32,
    stats: &mut SearchStats,
) -> Result<i32, SearchError> {
    stats.nodes += 1;
    let side = ctx.side_to_move;
    if depth == 0 {
        return Ok(position.evaluate_material(side));
    }

    let moves = position.generate_legal_moves(ctx)?;
    if moves.is_empty() {
        return Ok(terminal_score(position, ctx, depth));
    }

    let next = ctx.flipped();
    let mut best = -INFINITY;
    for mv in moves {
        let mut child = *position;
        child.apply_move(mv)?;
        let score = -negamax(&child, &next, depth - 1, stats)?;
        best = best.max(score);
    }
    Ok(best)
}

fn terminal_score(position: &Position, ctx: &GameContext, depth: u32) -> i32 {
    if position.is_in_check(ctx.side_to_move) {
        let remaining = i32::try_from(depth).unwrap_or(i32::MAX);
        -MATE_SCORE.saturating_add(remaining)
    } else {
        DRAW_SCORE
    }
}

/// Search every legal root move and return the first one with the highest
/// score.
///
/// # Errors
/// Returns [`SearchError::NoLegalMoves`] with the checkmate or stalemate
/// status when the side to move has no legal move, and
/// [`SearchError::Move`] on a corrupt position.
pub fn find_best_move(
    position: &Position,
    ctx: &GameContext,
    params: &SearchParams,
) -> Result<SearchResult, SearchError> {
    debug_assert!(
        position.validate().is_ok(),
        "search started from an inconsistent position: {:?}",
        position.validate()
    );
    let depth = params.root_depth();
    let moves = position.generate_legal_moves(ctx)?;
    debug!(
        "search root: depth {depth}, {} legal moves for {}",
        moves.len(),
        ctx.side_to_move
    );

    let Some(first) = moves.first() else {
        let status = Position::terminal_status(position.is_in_check(ctx.side_to_move));
        warn!("no legal moves at the root ({status})");
        return Err(SearchError::NoLegalMoves { status });
    };

    let next = ctx.flipped();
    let mut stats = SearchStats::default();
    let mut best_move = first;
    let mut best_score = -INFINITY;
    for mv in moves {
        let mut child = *position;
        child.apply_move(mv)?;
        let score = -negamax(&child, &next, depth - 1, &mut stats)?;
        trace!("root move {mv} scored {score}");
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    if constants::is_mate_score(best_score) {
        debug!(
            "search done: best {best_move} forces mate (score {best_score}) nodes {}",
            stats.nodes
        );
    } else {
        debug!(
            "search done: best {best_move} score {best_score} nodes {}",
            stats.nodes
        );
    }
    Ok(SearchResult {
        best_move,
        score: best_score,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_depth_zero_is_material() {
        let mut position = Position::new();
        position.clear_square(sq("a8"));
        let mut stats = SearchStats::default();
        let ctx = GameContext::new(Color::Black);
        assert_eq!(negamax(&position, &ctx, 0, &mut stats), Ok(-500));
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_root_depth_zero_is_clamped() {
        let position = Position::new();
        let result =
            find_best_move(&position, &GameContext::starting(), &SearchParams::with_depth(0))
                .unwrap();
        assert_eq!(result.best_move.to_string(), "a2a3");
        assert_eq!(result.stats.nodes, 20);
    }

    #[test]
    fn test_mate_score_prefers_faster_mate() {
        let mut position = Position::empty();
        position.set_piece(sq("h1"), Color::White, Piece::King);
        position.set_piece(sq("a8"), Color::Black, Piece::King);
        position.set_piece(sq("a1"), Color::Black, Piece::Rook);
        position.set_piece(sq("b2"), Color::Black, Piece::Rook);
        let ctx = GameContext::new(Color::White);
        let mut stats = SearchStats::default();
        assert_eq!(
            negamax(&position, &ctx, 3, &mut stats),
            Ok(-(MATE_SCORE + 3))
        );
        assert!(constants::is_mate_score(-(MATE_SCORE + 3)));
        assert!(!constants::is_mate_score(20_000));
    }

    #[test]
    fn test_mate_score_saturates_at_huge_depth() {
        let mut position = Position::empty();
        position.set_piece(sq("h1"), Color::White, Piece::King);
        position.set_piece(sq("a8"), Color::Black, Piece::King);
        position.set_piece(sq("a1"), Color::Black, Piece::Rook);
        position.set_piece(sq("b2"), Color::Black, Piece::Rook);
        let ctx = GameContext::new(Color::White);
        let mut stats = SearchStats::default();
        let score = negamax(&position, &ctx, u32::MAX, &mut stats).unwrap();
        assert_eq!(score, -i32::MAX);
        assert!(constants::is_mate_score(score));
        assert_eq!(stats.nodes, 1);
    }
}
