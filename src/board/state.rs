use super::error::PositionError;
use super::types::{mirror_vertically, Bitboard, Color, Piece, Square, NUM_BOARDS};

/// A board position: one bitboard per piece type per color, plus a
/// per-color union board.
///
/// Board `color.board_offset() + piece.index()` holds that color's pieces of
/// that type; board `color.board_offset() + 6` holds all of that color's
/// pieces. Positions are plain values: searching a hypothetical move copies
/// the position rather than undoing the move afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) boards: [Bitboard; NUM_BOARDS],
}

impl Position {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            for (color, back, pawn_rank) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(home), Some(pawn)) =
                    (Square::new(back, file), Square::new(pawn_rank, file))
                {
                    position.set_piece(home, color, piece);
                    position.set_piece(pawn, color, Piece::Pawn);
                }
            }
        }
        position
    }

    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Position {
            boards: [Bitboard::EMPTY; NUM_BOARDS],
        }
    }

    /// Build a position from the 14 raw boards, checking every invariant
    pub fn from_boards(boards: [Bitboard; NUM_BOARDS]) -> Result<Self, PositionError> {
        let position = Position { boards };
        position.validate()?;
        Ok(position)
    }

    /// The 14 raw boards in piece-color-type order
    #[must_use]
    pub const fn boards(&self) -> &[Bitboard; NUM_BOARDS] {
        &self.boards
    }

    #[inline]
    #[must_use]
    pub const fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.boards[color.board_index(piece)]
    }

    /// Every piece of `color`
    #[inline]
    #[must_use]
    pub const fn occupied_by(&self, color: Color) -> Bitboard {
        self.boards[color.all_index()]
    }

    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> Bitboard {
        Bitboard(self.occupied_by(Color::White).0 | self.occupied_by(Color::Black).0)
    }

    #[inline]
    #[must_use]
    pub const fn empty_squares(&self) -> Bitboard {
        Bitboard(!self.occupied().0)
    }

    #[inline]
    #[must_use]
    pub const fn king(&self, color: Color) -> Bitboard {
        self.pieces(color, Piece::King)
    }

    /// Place a piece, replacing whatever stood on the square
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.clear_square(sq);
        let bit = Bitboard::from_square(sq);
        self.boards[color.board_index(piece)] |= bit;
        self.boards[color.all_index()] |= bit;
    }

    /// Remove whatever stands on `sq`
    pub fn clear_square(&mut self, sq: Square) {
        let keep = !Bitboard::from_square(sq);
        for board in &mut self.boards {
            *board &= keep;
        }
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let color = Color::BOTH
            .into_iter()
            .find(|&c| self.occupied_by(c).contains(sq))?;
        Piece::ALL
            .into_iter()
            .find(|&p| self.pieces(color, p).contains(sq))
            .map(|p| (color, p))
    }

    /// Vertically mirrored board with the colors swapped. The result is the
    /// same position seen from the other side.
    #[must_use]
    pub fn flip_colors(&self) -> Self {
        let mut flipped = Position::empty();
        for color in Color::BOTH {
            let target = color.opponent();
            for piece in Piece::ALL {
                flipped.boards[target.board_index(piece)] =
                    Bitboard(mirror_vertically(self.pieces(color, piece).0));
            }
            flipped.boards[target.all_index()] =
                Bitboard(mirror_vertically(self.occupied_by(color).0));
        }
        flipped
    }

    /// Check the board invariants: each "all" board is the union of that
    /// color's piece boards, no square holds two pieces, the colors are
    /// disjoint, and both kings are present.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let mut union = 0u64;
            for piece in Piece::ALL {
                let idx = color.board_index(piece);
                let overlap = union & self.boards[idx].0;
                if overlap != 0 {
                    let first = Piece::ALL
                        .into_iter()
                        .map(|p| color.board_index(p))
                        .find(|&other| self.boards[other].0 & overlap != 0)
                        .unwrap_or(idx);
                    return Err(PositionError::OverlappingPieces {
                        first,
                        second: idx,
                        overlap,
                    });
                }
                union |= self.boards[idx].0;
            }
            let all = color.all_index();
            if self.boards[all].0 != union {
                return Err(PositionError::AllMaskMismatch {
                    board: all,
                    expected: union,
                    found: self.boards[all].0,
                });
            }
            if self.king(color).is_empty() {
                return Err(PositionError::MissingKing {
                    board: color.board_index(Piece::King),
                });
            }
        }

        let overlap = self.occupied_by(Color::White).0 & self.occupied_by(Color::Black).0;
        if overlap != 0 {
            return Err(PositionError::OverlappingColors { overlap });
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
