//! Text diagrams of bitboards and positions, rank 8 at the top.

use std::fmt;

use super::state::Position;
use super::types::{mirror_vertically, Bitboard, Color, Piece};

const FILE_LABELS: &str = "  a b c d e f g h";

/// Draw a single bitboard: `1` for set squares, `.` for clear ones.
///
/// The mask is mirrored first so that walking indices upward walks the
/// board from a8 to h1 in reading order.
#[must_use]
pub fn render_bitboard(mask: Bitboard) -> String {
    let mirrored = mirror_vertically(mask.0);
    let mut out = String::with_capacity(8 * 18 + FILE_LABELS.len());
    for row in 0..8 {
        out.push(char::from(b'8' - row as u8));
        for file in 0..8 {
            let bit = mirrored >> (row * 8 + file) & 1;
            out.push(' ');
            out.push(if bit == 1 { '1' } else { '.' });
        }
        out.push('\n');
    }
    out.push_str(FILE_LABELS);
    out
}

/// Piece letter for each square, indexed in mirrored (a8 first) order
fn mirrored_letters(position: &Position) -> [char; 64] {
    let mut letters = ['.'; 64];
    for color in Color::BOTH {
        for piece in Piece::ALL {
            let board = position.pieces(color, piece).mirrored();
            for sq in board {
                letters[sq.as_usize()] = piece.to_fen_char(color);
            }
        }
    }
    letters
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = mirrored_letters(self);
        for (row, chunk) in letters.chunks(8).enumerate() {
            write!(f, "{}", 8 - row)?;
            for letter in chunk {
                write!(f, " {letter}")?;
            }
            writeln!(f)?;
        }
        f.write_str(FILE_LABELS)
    }
}

impl Position {
    /// Every piece board drawn on its own, labelled with its owner and type
    #[must_use]
    pub fn render_boards(&self) -> String {
        let mut out = String::new();
        for color in Color::BOTH {
            for piece in Piece::ALL {
                out.push_str(&format!("{color} {piece}\n"));
                out.push_str(&render_bitboard(self.pieces(color, piece)));
                out.push_str("\n\n");
            }
            out.push_str(&format!("{color} all\n"));
            out.push_str(&render_bitboard(self.occupied_by(color)));
            out.push_str("\n\n");
        }
        out
    }
}
