//! Bitboard type and bit-level utilities.
//!
//! Bit `i` of a bitboard is square `i` in little-endian rank-file order,
//! so bit 0 is a1 and bit 63 is h8.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// De Bruijn constant used by both bit scans.
const DEBRUIJN64: u64 = 0x03f7_9d71_b4cb_0a89;

/// Maps `(x * DEBRUIJN64) >> 58` back to a bit index, where `x` is a mask of
/// the form `2^(n+1) - 1`.
const SCAN_INDEX64: [u8; 64] = [
    0, 47, 1, 56, 48, 27, 2, 60, //
    57, 49, 41, 37, 28, 16, 3, 61, //
    54, 58, 35, 52, 50, 42, 21, 44, //
    38, 32, 29, 23, 17, 11, 4, 62, //
    46, 55, 26, 59, 40, 36, 15, 53, //
    34, 51, 20, 43, 31, 22, 10, 45, //
    25, 39, 14, 33, 19, 30, 9, 24, //
    13, 18, 8, 12, 7, 6, 5, 63, //
];

/// Index of the least significant set bit.
///
/// # Panics
/// Panics if `mask` is zero.
#[inline]
#[must_use]
pub fn find_lowest_set_bit(mask: u64) -> u8 {
    assert!(mask != 0, "bit scan forward on an empty mask");
    let isolated = mask ^ (mask - 1);
    SCAN_INDEX64[(isolated.wrapping_mul(DEBRUIJN64) >> 58) as usize]
}

/// Index of the most significant set bit.
///
/// # Panics
/// Panics if `mask` is zero.
#[inline]
#[must_use]
pub fn find_highest_set_bit(mask: u64) -> u8 {
    assert!(mask != 0, "bit scan reverse on an empty mask");
    let mut spread = mask;
    spread |= spread >> 1;
    spread |= spread >> 2;
    spread |= spread >> 4;
    spread |= spread >> 8;
    spread |= spread >> 16;
    spread |= spread >> 32;
    SCAN_INDEX64[(spread.wrapping_mul(DEBRUIJN64) >> 58) as usize]
}

/// Number of set bits, clearing one bit per iteration.
#[inline]
#[must_use]
pub fn count_set_bits(mut mask: u64) -> u32 {
    let mut count = 0;
    while mask != 0 {
        count += 1;
        mask &= mask - 1;
    }
    count
}

/// Swap rank 1 with rank 8, rank 2 with rank 7, and so on.
#[inline]
#[must_use]
pub const fn mirror_vertically(mask: u64) -> u64 {
    const K1: u64 = 0x00FF_00FF_00FF_00FF;
    const K2: u64 = 0x0000_FFFF_0000_FFFF;
    let mut x = mask;
    x = ((x >> 8) & K1) | ((x & K1) << 8);
    x = ((x >> 16) & K2) | ((x & K2) << 16);
    (x >> 32) | (x << 32)
}

/// A 64-bit bitboard representing piece positions or attack squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_B: Bitboard = Bitboard(0x0202_0202_0202_0202);
    pub const FILE_G: Bitboard = Bitboard(0x4040_4040_4040_4040);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_3: Bitboard = Bitboard(0x0000_0000_00FF_0000);
    pub const RANK_4: Bitboard = Bitboard(0x0000_0000_FF00_0000);
    pub const RANK_5: Bitboard = Bitboard(0x0000_00FF_0000_0000);
    pub const RANK_6: Bitboard = Bitboard(0x0000_FF00_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Everything except the a-file; guards shifts toward the h-file.
    pub const NOT_A_FILE: Bitboard = Bitboard(!Self::FILE_A.0);
    /// Everything except the a- and b-files.
    pub const NOT_AB_FILE: Bitboard = Bitboard(!(Self::FILE_A.0 | Self::FILE_B.0));
    /// Everything except the h-file; guards shifts toward the a-file.
    pub const NOT_H_FILE: Bitboard = Bitboard(!Self::FILE_H.0);
    /// Everything except the g- and h-files.
    pub const NOT_GH_FILE: Bitboard = Bitboard(!(Self::FILE_G.0 | Self::FILE_H.0));

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u64 << sq.index())
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    /// Returns true if any square is set in both boards
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// Population count
    #[inline]
    #[must_use]
    pub fn count(self) -> u32 {
        count_set_bits(self.0)
    }

    /// Lowest set square.
    ///
    /// # Panics
    /// Panics on an empty bitboard.
    #[inline]
    #[must_use]
    pub fn lowest_square(self) -> Square {
        Square::from_index_unchecked(find_lowest_set_bit(self.0))
    }

    /// Highest set square.
    ///
    /// # Panics
    /// Panics on an empty bitboard.
    #[inline]
    #[must_use]
    pub fn highest_square(self) -> Square {
        Square::from_index_unchecked(find_highest_set_bit(self.0))
    }

    /// Lowest set square, or `None` for an empty bitboard
    #[inline]
    #[must_use]
    pub fn try_lowest_square(self) -> Option<Square> {
        (!self.is_empty()).then(|| self.lowest_square())
    }

    /// Remove and return the lowest set square
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<Square> {
        let sq = self.try_lowest_square()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    /// Vertically mirrored copy (rank 1 <-> rank 8)
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Bitboard(mirror_vertically(self.0))
    }

    /// Iterate set squares in ascending order
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Iterator over set squares of a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lowest()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0 .0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
