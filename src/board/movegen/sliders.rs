use super::super::attack_tables::sliding_attacks;
use super::super::masks::Direction;
use super::super::state::Position;
use super::super::types::{Bitboard, Color, Square};

/// Union of the blocker-truncated attacks over each ray set, minus `color`'s
/// own pieces. Queens pass both the orthogonal and the diagonal set.
pub(super) fn slider_targets(
    position: &Position,
    from: Square,
    color: Color,
    ray_sets: &[&[Direction; 4]],
) -> Bitboard {
    let occupied = position.occupied();
    let attacks = ray_sets
        .iter()
        .fold(Bitboard::EMPTY, |acc, dirs| acc | sliding_attacks(from, occupied, dirs));
    attacks & !position.occupied_by(color)
}
