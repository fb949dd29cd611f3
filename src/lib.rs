//! Bitboard chess move generation with a fixed-depth negamax search.

pub mod board;

pub use board::{find_best_move, Color, Game, GameContext, Move, Piece, Position, Square};
