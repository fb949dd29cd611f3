//! Check detection and the legal-move filter.
//!
//! A move is legal when, after applying it to a copy of the position, the
//! mover's king is not attacked. The original position is never touched.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::state::Position;
use super::types::{Color, GameContext, Move, MoveList, Square};

/// Outcome of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl Position {
    /// True if any of the opponent's pieces can move onto `side`'s king.
    ///
    /// Runs the opponent's full pseudo-legal generator (castling and
    /// en-passant state play no part in attacking a king, so an empty context
    /// is used) and returns at the first piece that reaches the king.
    #[must_use]
    pub fn is_in_check(&self, side: Color) -> bool {
        let attacker = side.opponent();
        self.attacks_any(attacker, self.king(side), &GameContext::new(attacker))
    }

    /// Apply `mv` to a copy and report whether `side`'s king is safe there.
    ///
    /// # Errors
    /// Propagates [`MoveError`] when `mv` cannot be applied at all.
    pub fn is_move_legal(&self, side: Color, mv: Move) -> Result<bool, MoveError> {
        let mut probe = *self;
        probe.apply_move(mv)?;
        Ok(!probe.is_in_check(side))
    }

    /// Pseudo-legal moves for the side to move that do not leave its king in
    /// check, in generation order.
    ///
    /// # Errors
    /// Returns [`MoveError`] if the generator produced a move the position
    /// rejects, which means the position itself is corrupt.
    pub fn generate_legal_moves(&self, ctx: &GameContext) -> Result<MoveList, MoveError> {
        let side = ctx.side_to_move;
        let mut legal = MoveList::with_capacity(48);
        for mv in self.pseudo_legal_moves(ctx) {
            if self.is_move_legal(side, mv)? {
                legal.push(mv);
            }
        }
        Ok(legal)
    }

    /// Classify the position for the side to move.
    ///
    /// # Errors
    /// See [`Position::generate_legal_moves`].
    pub fn status(&self, ctx: &GameContext) -> Result<GameStatus, MoveError> {
        if !self.generate_legal_moves(ctx)?.is_empty() {
            return Ok(GameStatus::Ongoing);
        }
        Ok(Self::terminal_status(self.is_in_check(ctx.side_to_move)))
    }

    pub(crate) const fn terminal_status(in_check: bool) -> GameStatus {
        if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// The legal move from `from` to `to`, if there is one.
    ///
    /// # Errors
    /// See [`Position::generate_legal_moves`].
    pub fn find_move(
        &self,
        ctx: &GameContext,
        from: Square,
        to: Square,
    ) -> Result<Option<Move>, MoveError> {
        Ok(self
            .generate_legal_moves(ctx)?
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to))
    }

    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    ///
    /// # Errors
    /// See [`Position::generate_legal_moves`].
    pub fn perft(&self, ctx: &GameContext, depth: u32) -> Result<u64, MoveError> {
        if depth == 0 {
            return Ok(1);
        }
        let moves = self.generate_legal_moves(ctx)?;
        if depth == 1 {
            return Ok(moves.len() as u64);
        }
        let next = ctx.flipped();
        let mut nodes = 0;
        for mv in moves {
            let mut child = *self;
            child.apply_move(mv)?;
            nodes += child.perft(&next, depth - 1)?;
        }
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    /// White king on h1, black king on a8
    fn kings_only() -> Position {
        let mut position = Position::empty();
        position.set_piece(sq("h1"), Color::White, Piece::King);
        position.set_piece(sq("a8"), Color::Black, Piece::King);
        position
    }

    #[test]
    fn test_start_position_not_in_check() {
        let position = Position::new();
        assert!(!position.is_in_check(Color::White));
        assert!(!position.is_in_check(Color::Black));
    }

    #[test]
    fn test_rook_gives_check_until_blocked() {
        let mut position = kings_only();
        position.set_piece(sq("h8"), Color::Black, Piece::Rook);
        assert!(position.is_in_check(Color::White));
        position.set_piece(sq("h4"), Color::White, Piece::Bishop);
        assert!(!position.is_in_check(Color::White));
    }

    #[test]
    fn test_pawn_check_direction() {
        let mut position = kings_only();
        position.set_piece(sq("h2"), Color::Black, Piece::Pawn);
        assert!(!position.is_in_check(Color::White));
        let mut position = kings_only();
        position.set_piece(sq("g3"), Color::Black, Piece::Pawn);
        assert!(!position.is_in_check(Color::White));
        position.set_piece(sq("g2"), Color::Black, Piece::Pawn);
        assert!(position.is_in_check(Color::White));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let mut position = kings_only();
        position.set_piece(sq("h4"), Color::White, Piece::Knight);
        position.set_piece(sq("h8"), Color::Black, Piece::Rook);
        let ctx = GameContext::new(Color::White);
        let moves = position.generate_legal_moves(&ctx).unwrap();
        assert!(moves.iter().all(|mv| mv.piece() == Piece::King));
        let pinned = Move::new(sq("h4"), sq("g6"), Piece::Knight, Color::White);
        assert_eq!(position.is_move_legal(Color::White, pinned), Ok(false));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut position = kings_only();
        position.set_piece(sq("g8"), Color::Black, Piece::Rook);
        let ctx = GameContext::new(Color::White);
        let moves = position.generate_legal_moves(&ctx).unwrap();
        let text: Vec<String> = moves.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["h1h2"]);
    }

    #[test]
    fn test_status_classifies_terminal_positions() {
        let ctx = GameContext::new(Color::White);

        let mut mated = kings_only();
        mated.set_piece(sq("a1"), Color::Black, Piece::Rook);
        mated.set_piece(sq("b2"), Color::Black, Piece::Rook);
        assert_eq!(mated.status(&ctx), Ok(GameStatus::Checkmate));

        let mut stalemated = kings_only();
        stalemated.set_piece(sq("f2"), Color::Black, Piece::Queen);
        assert_eq!(stalemated.status(&ctx), Ok(GameStatus::Stalemate));

        assert_eq!(
            Position::new().status(&GameContext::starting()),
            Ok(GameStatus::Ongoing)
        );
    }

    #[test]
    fn test_find_move_by_squares() {
        let position = Position::new();
        let ctx = GameContext::starting();
        let mv = position.find_move(&ctx, sq("g1"), sq("f3")).unwrap();
        assert_eq!(mv.map(Move::piece), Some(Piece::Knight));
        assert_eq!(position.find_move(&ctx, sq("e2"), sq("e5")).unwrap(), None);
    }

    #[test]
    fn test_perft_shallow() {
        let position = Position::new();
        let ctx = GameContext::starting();
        assert_eq!(position.perft(&ctx, 0), Ok(1));
        assert_eq!(position.perft(&ctx, 1), Ok(20));
        assert_eq!(position.perft(&ctx, 2), Ok(400));
    }
}
