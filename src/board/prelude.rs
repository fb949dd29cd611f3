//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use bitboard_negamax::board::prelude::*;
//!
//! let game = Game::from_fen(STARTING_FEN);
//! assert_eq!(game.position, Position::new());
//! ```

pub use super::{
    find_best_move, Bitboard, Color, FenError, Game, GameContext, GameStatus, Move, MoveError,
    MoveList, Piece, Position, SearchError, SearchParams, SearchResult, Square, STARTING_FEN,
};
