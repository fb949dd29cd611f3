//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Bitboard` - 64-bit square set, plus the bit-scan utilities
//! - `Square` - compact board square (u8 index)
//! - `Piece` and `Color` - piece types and colors
//! - `Move` and `MoveList` - move representation
//! - `GameContext` and `CastlingRights` - side to move and special-move state

mod bitboard;
mod context;
mod moves;
mod piece;
mod square;

pub use bitboard::{
    count_set_bits, find_highest_set_bit, find_lowest_set_bit, mirror_vertically, Bitboard,
    BitboardIter,
};
pub use context::{CastlingRights, GameContext};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, NUM_BOARDS};
pub use square::Square;

pub(crate) use context::{CASTLING_SQUARES, EN_PASSANT_RANKS};
