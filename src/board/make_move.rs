//! Applying a move to a position.

use super::error::MoveError;
use super::state::Position;
use super::types::{Bitboard, Move, Piece};

impl Position {
    /// Apply `mv` in place.
    ///
    /// The mover's piece leaves the origin and lands on the destination; a
    /// pawn reaching its last rank becomes a queen. Whatever enemy piece
    /// stood on the destination is removed. Both "all" boards are kept equal
    /// to the union of their piece boards.
    ///
    /// # Errors
    /// Returns [`MoveError::OriginNotOccupied`] when the mover's board does
    /// not hold the origin square and [`MoveError::SelfCapture`] when the
    /// destination already holds one of the mover's pieces. The position is
    /// left unchanged in both cases.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let color = mv.color();
        let piece = mv.piece();
        let from = Bitboard::from_square(mv.from());
        let to = Bitboard::from_square(mv.to());

        let piece_idx = color.board_index(piece);
        if !self.boards[piece_idx].intersects(from) {
            return Err(MoveError::OriginNotOccupied { mv });
        }
        if self.boards[color.all_index()].intersects(to) {
            return Err(MoveError::SelfCapture { mv });
        }

        self.boards[piece_idx] &= !from;
        let landing_idx = if mv.is_promotion() {
            color.board_index(Piece::Queen)
        } else {
            piece_idx
        };
        self.boards[landing_idx] |= to;
        self.boards[color.all_index()] = (self.boards[color.all_index()] & !from) | to;

        let enemy = color.opponent();
        for piece in Piece::ALL {
            self.boards[enemy.board_index(piece)] &= !to;
        }
        self.boards[enemy.all_index()] &= !to;
        Ok(())
    }
}
