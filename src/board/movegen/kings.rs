use super::super::attack_tables::KING_ATTACKS;
use super::super::state::Position;
use super::super::types::{Bitboard, CastlingRights, Color, Square, CASTLING_SQUARES};

/// One-step king targets.
///
/// Castling rights travel with the generator but castling moves are not
/// produced; only the rights mask itself is checked for sanity.
pub(super) fn king_targets(
    position: &Position,
    from: Square,
    color: Color,
    castling: CastlingRights,
) -> Bitboard {
    debug_assert!(
        (castling.mask() & !CASTLING_SQUARES).is_empty(),
        "castling rights outside g1/c1/g8/c8: {:#x}",
        castling.mask().0
    );
    KING_ATTACKS[from.as_usize()] & !position.occupied_by(color)
}
