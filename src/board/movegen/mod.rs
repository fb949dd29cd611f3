//! Pseudo-legal move generation.
//!
//! Each piece class has its own target generator. [`PieceGenerator`] picks
//! the right one for a piece type and carries the extra context the king and
//! pawn generators take. Generated moves respect movement patterns and
//! blockers but may leave the mover's own king in check; see `legality` for
//! the filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::masks::Direction;
use super::state::Position;
use super::types::{Bitboard, CastlingRights, Color, GameContext, Move, MoveList, Piece, Square};

const DIAGONAL_RAYS: &[&[Direction; 4]] = &[&Direction::DIAGONAL];
const ORTHOGONAL_RAYS: &[&[Direction; 4]] = &[&Direction::ORTHOGONAL];
const ALL_RAYS: &[&[Direction; 4]] = &[&Direction::ORTHOGONAL, &Direction::DIAGONAL];

/// Target generator for one piece class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceGenerator {
    /// Bishops, rooks and queens: the ray sets the piece slides along
    Sliding(&'static [&'static [Direction; 4]]),
    Knight,
    King { castling: CastlingRights },
    Pawn { en_passant: Bitboard },
}

impl PieceGenerator {
    #[must_use]
    pub fn for_piece(piece: Piece, ctx: &GameContext) -> Self {
        match piece {
            Piece::Pawn => PieceGenerator::Pawn {
                en_passant: ctx.en_passant,
            },
            Piece::Knight => PieceGenerator::Knight,
            Piece::Bishop => PieceGenerator::Sliding(DIAGONAL_RAYS),
            Piece::Rook => PieceGenerator::Sliding(ORTHOGONAL_RAYS),
            Piece::Queen => PieceGenerator::Sliding(ALL_RAYS),
            Piece::King => PieceGenerator::King {
                castling: ctx.castling,
            },
        }
    }

    /// Destination squares for a `color` piece on `from`, excluding squares
    /// held by that color.
    #[must_use]
    pub fn targets(self, position: &Position, from: Square, color: Color) -> Bitboard {
        match self {
            PieceGenerator::Sliding(ray_sets) => {
                sliders::slider_targets(position, from, color, ray_sets)
            }
            PieceGenerator::Knight => knights::knight_targets(position, from, color),
            PieceGenerator::King { castling } => {
                kings::king_targets(position, from, color, castling)
            }
            PieceGenerator::Pawn { en_passant } => {
                pawns::pawn_targets(position, from, color, en_passant)
            }
        }
    }
}

impl Position {
    /// Every pseudo-legal move for the side to move in `ctx`.
    ///
    /// Moves come out grouped by piece type (pawns, knights, bishops, rooks,
    /// queens, king), then by ascending origin square, then by ascending
    /// destination square. Search relies on this order for tie-breaking.
    #[must_use]
    pub fn pseudo_legal_moves(&self, ctx: &GameContext) -> MoveList {
        let color = ctx.side_to_move;
        let mut moves = MoveList::with_capacity(64);
        for piece in Piece::ALL {
            let generator = PieceGenerator::for_piece(piece, ctx);
            for from in self.pieces(color, piece) {
                for to in generator.targets(self, from, color) {
                    moves.push(Move::new(from, to, piece, color));
                }
            }
        }
        moves
    }

    /// True if any `attacker` piece has `targets` among its pseudo-legal
    /// destinations. Stops at the first piece that does.
    #[must_use]
    pub fn attacks_any(&self, attacker: Color, targets: Bitboard, ctx: &GameContext) -> bool {
        Piece::ALL.into_iter().any(|piece| {
            let generator = PieceGenerator::for_piece(piece, ctx);
            self.pieces(attacker, piece)
                .iter()
                .any(|from| generator.targets(self, from, attacker).intersects(targets))
        })
    }

    /// Union of every pseudo-legal destination of `color`'s pieces
    #[must_use]
    pub fn attacked_squares(&self, color: Color, ctx: &GameContext) -> Bitboard {
        let mut attacked = Bitboard::EMPTY;
        for piece in Piece::ALL {
            let generator = PieceGenerator::for_piece(piece, ctx);
            for from in self.pieces(color, piece) {
                attacked |= generator.targets(self, from, color);
            }
        }
        attacked
    }
}
