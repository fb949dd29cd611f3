//! FEN parsing and serialization.
//!
//! A [`Game`] is what a FEN string describes: the board plus the context the
//! engine threads through move generation, and the two move counters.

use std::fmt;
use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::state::Position;
use super::types::{Bitboard, CastlingRights, Color, GameContext, Move, Piece, Square};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASTLING_FLAGS: [(char, Color, bool); 4] = [
    ('K', Color::White, true),
    ('Q', Color::White, false),
    ('k', Color::Black, true),
    ('q', Color::Black, false),
];

/// Corner squares whose rook carries each castling right
const ROOK_HOMES: [(Square, Color, bool); 4] = [
    (Square::H1, Color::White, true),
    (Square::A1, Color::White, false),
    (Square::H8, Color::Black, true),
    (Square::A8, Color::Black, false),
];

/// A position together with its game context and move counters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub position: Position,
    pub context: GameContext,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Game {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: Position::new(),
            context: GameContext::starting(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parse a FEN string.
    ///
    /// The board, side to move, castling and en-passant fields are required;
    /// the half-move clock and full-move number default to 0 and 1. The
    /// parsed board must pass [`Position::validate`], and the side that is
    /// not on move must not be in check.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let position = parse_board(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (_, color, kingside) = CASTLING_FLAGS
                    .iter()
                    .copied()
                    .find(|(flag, _, _)| *flag == c)
                    .ok_or(FenError::InvalidCastling { char: c })?;
                castling.set(color, kingside);
            }
        }

        let en_passant = parse_en_passant(parts[3])?;
        let halfmove_clock = parts.get(4).map_or(Ok(0), |s| parse_counter(s))?;
        let fullmove_number = parts.get(5).map_or(Ok(1), |s| parse_counter(s))?;

        let waiting = side_to_move.opponent();
        if position.is_in_check(waiting) {
            return Err(FenError::OpponentInCheck { side: waiting });
        }

        Ok(Game {
            position,
            context: GameContext {
                side_to_move,
                castling,
                en_passant,
            },
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Parse a FEN string.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Write the game back out as a six-field FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = Square::new(rank, file).and_then(|sq| self.position.piece_at(sq));
                if let Some((color, piece)) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.context.white_to_move() { "w" } else { "b" };
        let mut castling: String = CASTLING_FLAGS
            .iter()
            .filter(|(_, color, kingside)| self.context.castling.has(*color, *kingside))
            .map(|(flag, _, _)| *flag)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .context
            .en_passant
            .try_lowest_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Play `mv` for the side to move and advance the context and counters.
    ///
    /// The moved side's castling rights are dropped when its king or a corner
    /// rook leaves home, and the opponent's when one of its corner rooks is
    /// captured. A double pawn push records the square it passed over.
    ///
    /// # Errors
    /// [`MoveError::WrongSide`] if `mv` belongs to the side not on move,
    /// otherwise see [`Position::apply_move`]. The game is unchanged on error.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        if mv.color() != self.context.side_to_move {
            return Err(MoveError::WrongSide { mv });
        }
        let is_capture = self.position.occupied().contains(mv.to());
        self.position.apply_move(mv)?;

        let color = mv.color();
        for sq in [mv.from(), mv.to()] {
            for (home, owner, kingside) in ROOK_HOMES {
                if sq == home {
                    self.context.castling.remove(owner, kingside);
                }
            }
        }
        if mv.piece() == Piece::King {
            self.context.castling.remove(color, true);
            self.context.castling.remove(color, false);
        }

        let distance = mv.from().index().abs_diff(mv.to().index());
        self.context.en_passant = if mv.piece() == Piece::Pawn && distance == 16 {
            let skipped = (mv.from().index() + mv.to().index()) / 2;
            Square::from_index(skipped as usize).map_or(Bitboard::EMPTY, Bitboard::from_square)
        } else {
            Bitboard::EMPTY
        };

        if mv.piece() == Piece::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.context.side_to_move = color.opponent();
        Ok(())
    }
}

fn parse_board(field: &str) -> Result<Position, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut position = Position::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as usize;
                if file > 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file,
                    });
                }
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let sq = Square::new(rank, file).ok_or(FenError::TooManyFiles {
                rank: rank_idx,
                files: file + 1,
            })?;
            position.set_piece(sq, color, piece);
            file += 1;
        }
        if file < 8 {
            return Err(FenError::TooFewFiles {
                rank: rank_idx,
                files: file,
            });
        }
    }

    position.validate()?;
    Ok(position)
}

fn parse_en_passant(field: &str) -> Result<Bitboard, FenError> {
    if field == "-" {
        return Ok(Bitboard::EMPTY);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq: Square = field.parse().map_err(|_| invalid())?;
    if sq.rank() != 2 && sq.rank() != 5 {
        return Err(invalid());
    }
    Ok(Bitboard::from_square(sq))
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidClock {
        found: field.to_string(),
    })
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::try_from_fen(s)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
