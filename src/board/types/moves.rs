//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveError;

const SQUARE_MASK: u16 = 0x3F;
const TO_SHIFT: u16 = 6;
const PIECE_SHIFT: u16 = 12;
const PIECE_MASK: u16 = 0x7;
const BLACK_FLAG: u16 = 1 << 15;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-14: moving piece type
/// - bit 15:     set when the mover is Black
///
/// Captures and promotions are not stored; both follow from the position
/// the move is applied to and the mover's type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct Move(u16);

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece, color: Color) -> Self {
        let color_bit = match color {
            Color::White => 0,
            Color::Black => BLACK_FLAG,
        };
        Move(
            from.index() as u16
                | ((to.index() as u16) << TO_SHIFT)
                | ((piece.index() as u16) << PIECE_SHIFT)
                | color_bit,
        )
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & SQUARE_MASK) as u8)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> TO_SHIFT) & SQUARE_MASK) as u8)
    }

    /// Get the moving piece type
    #[inline]
    #[must_use]
    pub fn piece(self) -> Piece {
        // `Move::new` and `TryFrom<u16>` only ever store 0-5 here.
        Piece::from_index(((self.0 >> PIECE_SHIFT) & PIECE_MASK) as usize).unwrap_or(Piece::King)
    }

    /// Get the moving color
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if self.0 & BLACK_FLAG != 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Returns true if a pawn lands on its last rank (always a queen promotion)
    #[inline]
    #[must_use]
    pub fn is_promotion(self) -> bool {
        self.piece() == Piece::Pawn && self.to().rank() == self.color().promotion_rank()
    }
}

impl TryFrom<u16> for Move {
    type Error = MoveError;

    /// Decode a raw move, rejecting piece fields outside 0-5.
    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match Piece::from_index(((raw >> PIECE_SHIFT) & PIECE_MASK) as usize) {
            Some(_) => Ok(Move(raw)),
            None => Err(MoveError::InvalidEncoding { raw }),
        }
    }
}

impl From<Move> for u16 {
    fn from(mv: Move) -> Self {
        mv.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {} {}{})",
            self.color(),
            self.piece(),
            self.from(),
            self.to()
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if self.is_promotion() {
            write!(f, "{}", Piece::Queen.to_char())?;
        }
        Ok(())
    }
}

/// Ordered, growable list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        MoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
