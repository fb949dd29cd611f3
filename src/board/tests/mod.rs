//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal and legal move generation
//! - `legality.rs` - Check detection and the legality filter
//! - `make_move.rs` - Move application and board invariants
//! - `search.rs` - Negamax scoring and root move choice
//! - `perft.rs` - Leaf counts against published values
//! - `proptest.rs` - Property-based tests

mod legality;
mod make_move;
mod search;

use rand::prelude::*;

use crate::board::{Game, GameContext, Position};

/// Play up to `plies` random legal moves from the start position, stopping
/// early at a terminal position.
pub(super) fn random_playout(seed: u64, plies: usize) -> (Position, GameContext) {
    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = game.position.generate_legal_moves(&game.context).unwrap();
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        game.play(mv).unwrap();
    }
    (game.position, game.context)
}
