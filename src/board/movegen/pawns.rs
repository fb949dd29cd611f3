use super::super::attack_tables::{attack_targets, double_push_targets, single_push_targets};
use super::super::state::Position;
use super::super::types::{Bitboard, Color, Square, EN_PASSANT_RANKS};

/// Pushes and captures for the pawn on `from`.
///
/// The en-passant target is accepted but not used for captures.
pub(super) fn pawn_targets(
    position: &Position,
    from: Square,
    color: Color,
    en_passant: Bitboard,
) -> Bitboard {
    debug_assert!(
        en_passant.count() <= 1 && (en_passant & !EN_PASSANT_RANKS).is_empty(),
        "malformed en-passant mask {:#x}",
        en_passant.0
    );
    let pawn = Bitboard::from_square(from);
    let empty = position.empty_squares();
    single_push_targets(color, pawn, empty)
        | double_push_targets(color, pawn, empty)
        | attack_targets(color, pawn, position.occupied_by(color.opponent()))
}
