//! Line masks and rays on an empty board.
//!
//! Every mask here is a pure function of a square index. The ray tables are
//! built at compile time from the line masks.

use super::types::{Bitboard, Square};

const RANK_1: u64 = 0x0000_0000_0000_00FF;
const FILE_A: u64 = 0x0101_0101_0101_0101;
/// a1-h8
const MAIN_DIAGONAL: u64 = 0x8040_2010_0804_0201;
/// h1-a8
const MAIN_ANTI_DIAGONAL: u64 = 0x0102_0408_1020_4080;

/// Shift a canonical diagonal so it passes through `sq`.
///
/// `offset` is how many ranks the diagonal must move up (negative) or down
/// (positive); shifting by whole ranks never wraps across files.
#[inline]
const fn shift_diagonal(diagonal: u64, offset: i32) -> u64 {
    let north = -offset & (offset >> 31);
    let south = offset & (-offset >> 31);
    (diagonal >> south) << north
}

#[inline]
#[must_use]
pub const fn rank_mask(sq: u8) -> u64 {
    RANK_1 << (sq & 56)
}

#[inline]
#[must_use]
pub const fn file_mask(sq: u8) -> u64 {
    FILE_A << (sq & 7)
}

/// The a1-h8 direction diagonal through `sq`
#[inline]
#[must_use]
pub const fn diagonal_mask(sq: u8) -> u64 {
    let offset = 8 * (sq & 7) as i32 - (sq & 56) as i32;
    shift_diagonal(MAIN_DIAGONAL, offset)
}

/// The h1-a8 direction diagonal through `sq`
#[inline]
#[must_use]
pub const fn anti_diagonal_mask(sq: u8) -> u64 {
    let offset = 56 - 8 * (sq & 7) as i32 - (sq & 56) as i32;
    shift_diagonal(MAIN_ANTI_DIAGONAL, offset)
}

/// Squares strictly above `sq` in index order
#[inline]
const fn above(sq: u8) -> u64 {
    (!1u64) << sq
}

/// Squares strictly below `sq` in index order
#[inline]
const fn below(sq: u8) -> u64 {
    (1u64 << sq) - 1
}

/// One of the eight compass directions a slider can move in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    SouthWest,
    NorthWest,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::SouthEast,
    ];

    /// Rook rays, alternating increasing and decreasing directions
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Bishop rays, alternating increasing and decreasing directions
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::SouthEast,
    ];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
            Direction::NorthEast => 4,
            Direction::SouthWest => 5,
            Direction::NorthWest => 6,
            Direction::SouthEast => 7,
        }
    }

    /// True when squares along the ray have increasing indices, so the
    /// nearest blocker is the lowest set bit.
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::NorthEast | Direction::NorthWest
        )
    }

    /// Every square beyond `sq` in this direction on an empty board
    #[inline]
    #[must_use]
    pub fn ray(self, sq: Square) -> Bitboard {
        Bitboard(RAYS[self.index()][sq.as_usize()])
    }

    const fn compute(self, sq: u8) -> u64 {
        match self {
            Direction::North => file_mask(sq) & above(sq),
            Direction::South => file_mask(sq) & below(sq),
            Direction::East => rank_mask(sq) & above(sq),
            Direction::West => rank_mask(sq) & below(sq),
            Direction::NorthEast => diagonal_mask(sq) & above(sq),
            Direction::SouthWest => diagonal_mask(sq) & below(sq),
            Direction::NorthWest => anti_diagonal_mask(sq) & above(sq),
            Direction::SouthEast => anti_diagonal_mask(sq) & below(sq),
        }
    }
}

/// `RAYS[direction][square]`
static RAYS: [[u64; 64]; 8] = {
    let mut rays = [[0u64; 64]; 8];
    let mut d = 0;
    while d < 8 {
        let dir = Direction::ALL[d];
        let mut sq = 0;
        while sq < 64 {
            rays[d][sq] = dir.compute(sq as u8);
            sq += 1;
        }
        d += 1;
    }
    rays
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn squares(names: &[&str]) -> u64 {
        names.iter().fold(0, |acc, n| acc | (1u64 << sq(n).index()))
    }

    #[test]
    fn test_line_masks_through_d4() {
        let d4 = sq("d4").index();
        assert_eq!(rank_mask(d4), 0x0000_0000_FF00_0000);
        assert_eq!(file_mask(d4), 0x0808_0808_0808_0808);
        assert_eq!(diagonal_mask(d4), MAIN_DIAGONAL);
        assert_eq!(
            anti_diagonal_mask(d4),
            squares(&["a7", "b6", "c5", "d4", "e3", "f2", "g1"])
        );
    }

    #[test]
    fn test_diagonals_do_not_wrap() {
        let h1 = sq("h1").index();
        assert_eq!(diagonal_mask(h1), squares(&["h1"]));
        assert_eq!(anti_diagonal_mask(h1), MAIN_ANTI_DIAGONAL);
        let a8 = sq("a8").index();
        assert_eq!(diagonal_mask(a8), squares(&["a8"]));
        let b1 = sq("b1").index();
        assert_eq!(
            diagonal_mask(b1),
            squares(&["b1", "c2", "d3", "e4", "f5", "g6", "h7"])
        );
    }

    #[test]
    fn test_rays_exclude_origin() {
        for idx in 0..64 {
            let s = Square::from_index(idx).unwrap();
            for dir in Direction::ALL {
                assert!(!dir.ray(s).contains(s), "{dir:?} ray from {s} holds origin");
            }
        }
    }

    #[test]
    fn test_rays_from_e4() {
        let e4 = sq("e4");
        assert_eq!(
            Direction::North.ray(e4).0,
            squares(&["e5", "e6", "e7", "e8"])
        );
        assert_eq!(Direction::West.ray(e4).0, squares(&["a4", "b4", "c4", "d4"]));
        assert_eq!(
            Direction::NorthWest.ray(e4).0,
            squares(&["d5", "c6", "b7", "a8"])
        );
        assert_eq!(Direction::SouthEast.ray(e4).0, squares(&["f3", "g2", "h1"]));
        assert_eq!(Direction::SouthWest.ray(e4).0, squares(&["d3", "c2", "b1"]));
    }

    #[test]
    fn test_opposite_rays_partition_lines() {
        for idx in 0..64u8 {
            let s = Square::from_index(idx as usize).unwrap();
            let origin = 1u64 << idx;
            let file = Direction::North.ray(s).0 | Direction::South.ray(s).0 | origin;
            let diag = Direction::NorthEast.ray(s).0 | Direction::SouthWest.ray(s).0 | origin;
            assert_eq!(file, file_mask(idx));
            assert_eq!(diag, diagonal_mask(idx));
        }
    }

    #[test]
    fn test_direction_sign_matches_ray() {
        let d4 = sq("d4");
        for dir in Direction::ALL {
            let ray = dir.ray(d4);
            if dir.is_positive() {
                assert!(ray.lowest_square() > d4);
            } else {
                assert!(ray.highest_square() < d4);
            }
        }
    }
}
