use super::state::Position;
use super::types::{Color, Piece};

impl Position {
    /// Material balance from the point of view of `side`.
    ///
    /// Each piece type contributes its value times the difference in piece
    /// counts. The king's value is included; legal play never removes a king,
    /// so it cancels out in any position reached by legal moves.
    #[must_use]
    pub fn evaluate_material(&self, side: Color) -> i32 {
        let white_minus_black: i32 = Piece::ALL
            .into_iter()
            .map(|piece| {
                let white = self.pieces(Color::White, piece).count() as i32;
                let black = self.pieces(Color::Black, piece).count() as i32;
                piece.value() * (white - black)
            })
            .sum();
        side.sign() * white_minus_black
    }
}
