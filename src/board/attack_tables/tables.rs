//! Leaper patterns (knights, kings) and pawn target sets.
//!
//! Patterns are built by shifting a set of pieces and masking off squares
//! that would wrap around the board edge. The per-square tables are filled
//! from the same functions on first use.

use once_cell::sync::Lazy;

use super::super::types::{Bitboard, Color};

/// Knight targets for every knight in `knights`.
#[must_use]
pub fn knight_pattern(knights: Bitboard) -> Bitboard {
    let k = knights.0;
    let l1 = (k >> 1) & Bitboard::NOT_H_FILE.0;
    let l2 = (k >> 2) & Bitboard::NOT_GH_FILE.0;
    let r1 = (k << 1) & Bitboard::NOT_A_FILE.0;
    let r2 = (k << 2) & Bitboard::NOT_AB_FILE.0;
    let h1 = l1 | r1;
    let h2 = l2 | r2;
    Bitboard((h1 << 16) | (h1 >> 16) | (h2 << 8) | (h2 >> 8))
}

/// King targets for every king in `kings`.
#[must_use]
pub fn king_pattern(kings: Bitboard) -> Bitboard {
    let k = kings.0;
    let l1 = (k >> 1) & Bitboard::NOT_H_FILE.0;
    let r1 = (k << 1) & Bitboard::NOT_A_FILE.0;
    let row = k | l1 | r1;
    Bitboard(k ^ (row | (row << 8) | (row >> 8)))
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = knight_pattern(Bitboard(1u64 << sq));
    }
    attacks
});

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = king_pattern(Bitboard(1u64 << sq));
    }
    attacks
});

/// Squares reached by pushing each pawn one rank into an empty square.
#[must_use]
pub fn single_push_targets(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    let pushed = match color {
        Color::White => pawns.0 << 8,
        Color::Black => pawns.0 >> 8,
    };
    Bitboard(pushed) & empty
}

/// Squares reached by a two-rank push from the starting rank; both squares
/// passed over must be empty.
#[must_use]
pub fn double_push_targets(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    let singles = single_push_targets(color, pawns, empty);
    let landing_rank = match color {
        Color::White => Bitboard::RANK_4,
        Color::Black => Bitboard::RANK_5,
    };
    single_push_targets(color, singles, empty) & landing_rank
}

/// Diagonal captures onto squares held by `enemy`.
#[must_use]
pub fn attack_targets(color: Color, pawns: Bitboard, enemy: Bitboard) -> Bitboard {
    let p = pawns.0;
    let attacks = match color {
        Color::White => ((p << 7) & Bitboard::NOT_H_FILE.0) | ((p << 9) & Bitboard::NOT_A_FILE.0),
        Color::Black => ((p >> 7) & Bitboard::NOT_A_FILE.0) | ((p >> 9) & Bitboard::NOT_H_FILE.0),
    };
    Bitboard(attacks) & enemy
}
