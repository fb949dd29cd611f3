//! Attack generation for move generation.
//!
//! Sliding attacks walk the classical ray approach: take the full ray, find
//! the nearest blocker and cut the ray off behind it. Leaper patterns and
//! pawn targets live in `tables`.

mod tables;

pub use tables::{
    attack_targets, double_push_targets, king_pattern, knight_pattern, single_push_targets,
};
pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS};

use super::masks::Direction;
use super::types::{Bitboard, Square};

/// Attacks along one ray, up to and including the first occupied square.
#[inline]
#[must_use]
pub fn ray_attacks(sq: Square, occupied: Bitboard, dir: Direction) -> Bitboard {
    let ray = dir.ray(sq);
    let blockers = ray & occupied;
    if blockers.is_empty() {
        return ray;
    }
    let nearest = if dir.is_positive() {
        blockers.lowest_square()
    } else {
        blockers.highest_square()
    };
    ray ^ dir.ray(nearest)
}

/// Union of the blocker-truncated rays from `sq` in each of `dirs`.
///
/// Occupied end squares are included whoever owns them; callers strip
/// their own pieces.
#[must_use]
pub fn sliding_attacks(sq: Square, occupied: Bitboard, dirs: &[Direction; 4]) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |acc, &dir| {
        acc | ray_attacks(sq, occupied, dir)
    })
}

#[inline]
#[must_use]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks(sq, occupied, &Direction::ORTHOGONAL)
}

#[inline]
#[must_use]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks(sq, occupied, &Direction::DIAGONAL)
}

#[inline]
#[must_use]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::masks::{anti_diagonal_mask, diagonal_mask, file_mask, rank_mask};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn bb(names: &[&str]) -> Bitboard {
        names
            .iter()
            .fold(Bitboard::EMPTY, |acc, n| acc | Bitboard::from_square(sq(n)))
    }

    #[test]
    fn test_empty_board_rook_covers_lines() {
        for idx in 0..64u8 {
            let s = Square::from_index(idx as usize).unwrap();
            let expected = (rank_mask(idx) | file_mask(idx)) & !(1u64 << idx);
            assert_eq!(rook_attacks(s, Bitboard::EMPTY).0, expected);
            let diag = (diagonal_mask(idx) | anti_diagonal_mask(idx)) & !(1u64 << idx);
            assert_eq!(bishop_attacks(s, Bitboard::EMPTY).0, diag);
        }
    }

    #[test]
    fn test_blocker_truncates_ray_inclusively() {
        let occupied = bb(&["a1", "e1"]);
        let attacks = rook_attacks(sq("a1"), occupied);
        assert!(attacks.contains(sq("e1")));
        assert!(!attacks.contains(sq("f1")));
        assert!(!attacks.contains(sq("h1")));
        assert!(attacks.contains(sq("d1")));
        assert!(attacks.contains(sq("a8")));
    }

    #[test]
    fn test_negative_ray_uses_nearest_blocker() {
        let occupied = bb(&["h8", "h5", "h2"]);
        let south = ray_attacks(sq("h8"), occupied, Direction::South);
        assert_eq!(south, bb(&["h7", "h6", "h5"]));
        let west = ray_attacks(sq("h8"), bb(&["c8", "f8"]), Direction::West);
        assert_eq!(west, bb(&["g8", "f8"]));
    }

    #[test]
    fn test_bishop_blocked_on_both_diagonals() {
        let occupied = bb(&["d4", "f6", "b2", "b6", "g1"]);
        let attacks = bishop_attacks(sq("d4"), occupied);
        assert_eq!(attacks, bb(&["e5", "f6", "c3", "b2", "c5", "b6", "e3", "f2", "g1"]));
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let occupied = bb(&["d1", "d7", "a4", "g7", "b2"]);
        let s = sq("d4");
        assert_eq!(
            queen_attacks(s, occupied),
            rook_attacks(s, occupied) | bishop_attacks(s, occupied)
        );
    }
}
