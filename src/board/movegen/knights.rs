use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::state::Position;
use super::super::types::{Bitboard, Color, Square};

pub(super) fn knight_targets(position: &Position, from: Square, color: Color) -> Bitboard {
    KNIGHT_ATTACKS[from.as_usize()] & !position.occupied_by(color)
}
