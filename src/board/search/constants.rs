//! Search scores.

/// Base score of a checkmated side. Terminal nodes add the remaining depth so
/// that shorter mates score further from zero.
pub const MATE_SCORE: i32 = 1_000_000;

/// Score of a stalemate
pub const DRAW_SCORE: i32 = 0;

/// Bound on every score, mate scores included. Negating it never overflows.
pub const INFINITY: i32 = i32::MAX;

/// True when `score` reports a forced mate for either side
#[must_use]
pub const fn is_mate_score(score: i32) -> bool {
    score >= MATE_SCORE || score <= -MATE_SCORE
}
