//! Game context threaded through move generation and search.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

/// King destination squares that castling rights are recorded on.
pub(crate) const CASTLING_SQUARES: Bitboard = Bitboard(
    (1u64 << Square::G1.index())
        | (1u64 << Square::C1.index())
        | (1u64 << Square::G8.index())
        | (1u64 << Square::C8.index()),
);

/// Ranks an en-passant target can sit on.
pub(crate) const EN_PASSANT_RANKS: Bitboard = Bitboard(Bitboard::RANK_3.0 | Bitboard::RANK_6.0);

/// Castling rights as a square mask: one bit per king destination square
/// (g1, c1, g8, c8) that is still eligible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(Bitboard);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(Bitboard::EMPTY)
    }

    /// All four castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(CASTLING_SQUARES)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0.contains(Self::square_for(color, kingside))
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Bitboard::from_square(Self::square_for(color, kingside));
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Bitboard::from_square(Self::square_for(color, kingside));
    }

    /// Raw square mask
    #[inline]
    #[must_use]
    pub const fn mask(self) -> Bitboard {
        self.0
    }

    #[inline]
    const fn square_for(color: Color, kingside: bool) -> Square {
        match (color, kingside) {
            (Color::White, true) => Square::G1,
            (Color::White, false) => Square::C1,
            (Color::Black, true) => Square::G8,
            (Color::Black, false) => Square::C8,
        }
    }
}

/// Side to move plus the castling and en-passant state that accompanies a
/// position. Passed by value; the engine never mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameContext {
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square mask with at most one bit set
    pub en_passant: Bitboard,
}

impl GameContext {
    #[must_use]
    pub const fn new(side_to_move: Color) -> Self {
        GameContext {
            side_to_move,
            castling: CastlingRights::none(),
            en_passant: Bitboard::EMPTY,
        }
    }

    /// Context of the standard starting position
    #[must_use]
    pub const fn starting() -> Self {
        GameContext {
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: Bitboard::EMPTY,
        }
    }

    #[must_use]
    pub const fn white_to_move(self) -> bool {
        self.side_to_move.is_white()
    }

    /// Same castling and en-passant state with the other side to move
    #[must_use]
    pub const fn flipped(self) -> Self {
        GameContext {
            side_to_move: self.side_to_move.opponent(),
            ..self
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        GameContext::starting()
    }
}
