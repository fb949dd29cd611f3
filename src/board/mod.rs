//! Bitboard position representation, move generation and search.
//!
//! A [`Position`] is fourteen bitboards: six piece types and one union board
//! for each color. Moves are generated per piece class, filtered for legality
//! by trying them on a copy, and searched with fixed-depth negamax.
//!
//! # Example
//! ```
//! use bitboard_negamax::board::{find_best_move, GameContext, Position, SearchParams};
//!
//! let position = Position::new();
//! let ctx = GameContext::starting();
//! let moves = position.generate_legal_moves(&ctx).unwrap();
//! assert_eq!(moves.len(), 20);
//!
//! let result = find_best_move(&position, &ctx, &SearchParams::with_depth(1)).unwrap();
//! assert_eq!(result.best_move.to_string(), "a2a3");
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod legality;
mod make_move;
pub mod masks;
mod movegen;
pub mod prelude;
mod render;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{
    attack_targets, bishop_attacks, double_push_targets, king_pattern, knight_pattern,
    queen_attacks, ray_attacks, rook_attacks, single_push_targets, sliding_attacks,
};
pub use error::{FenError, MoveError, PositionError, SearchError, SquareError};
pub use fen::{Game, STARTING_FEN};
pub use legality::GameStatus;
pub use masks::Direction;
pub use movegen::PieceGenerator;
pub use render::render_bitboard;
pub use search::{find_best_move, negamax, SearchParams, SearchResult, SearchStats};
pub use state::Position;
pub use types::{
    count_set_bits, find_highest_set_bit, find_lowest_set_bit, mirror_vertically, Bitboard,
    BitboardIter, CastlingRights, Color, GameContext, Move, MoveList, Piece, Square, NUM_BOARDS,
};
