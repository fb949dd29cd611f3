//! Error types for board operations.

use std::fmt;

use super::legality::GameStatus;
use super::types::{Color, Move};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Board field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
    /// Half-move clock or full-move number is not a number
    InvalidClock { found: String },
    /// The parsed board breaks a position invariant
    InvalidPosition(PositionError),
    /// The side that just moved is still in check, so its king could be taken
    OpponentInCheck { side: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
            FenError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
            FenError::OpponentInCheck { side } => {
                write!(f, "{side} is in check but it is not {side}'s move")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(err: PositionError) -> Self {
        FenError::InvalidPosition(err)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A position invariant that does not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A color's "all" board differs from the union of its piece boards
    AllMaskMismatch { board: usize, expected: u64, found: u64 },
    /// Two piece boards of the same color share a square
    OverlappingPieces { first: usize, second: usize, overlap: u64 },
    /// The two "all" boards share a square
    OverlappingColors { overlap: u64 },
    /// A side has no king
    MissingKing { board: usize },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::AllMaskMismatch {
                board,
                expected,
                found,
            } => write!(
                f,
                "board {board} should be {expected:#018x} (union of piece boards), found {found:#018x}"
            ),
            PositionError::OverlappingPieces {
                first,
                second,
                overlap,
            } => write!(f, "boards {first} and {second} overlap on {overlap:#018x}"),
            PositionError::OverlappingColors { overlap } => {
                write!(f, "white and black pieces overlap on {overlap:#018x}")
            }
            PositionError::MissingKing { board } => write!(f, "king board {board} is empty"),
        }
    }
}

impl std::error::Error for PositionError {}

/// A move that cannot be applied to a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square is not in the mover's piece board
    OriginNotOccupied { mv: Move },
    /// The destination already holds one of the mover's pieces
    SelfCapture { mv: Move },
    /// The move belongs to the side that is not on move
    WrongSide { mv: Move },
    /// A raw 16-bit move with a piece field outside 0-5
    InvalidEncoding { raw: u16 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OriginNotOccupied { mv } => write!(
                f,
                "cannot apply {mv}: no {} {} on {}",
                mv.color(),
                mv.piece(),
                mv.from()
            ),
            MoveError::SelfCapture { mv } => write!(
                f,
                "cannot apply {mv}: {} already occupies {}",
                mv.color(),
                mv.to()
            ),
            MoveError::WrongSide { mv } => write!(
                f,
                "cannot play {mv}: it is {}'s move, not {}'s",
                mv.color().opponent(),
                mv.color()
            ),
            MoveError::InvalidEncoding { raw } => {
                write!(f, "invalid move encoding {raw:#06x}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for best-move search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no legal moves at the root
    NoLegalMoves { status: GameStatus },
    /// A move generated during search could not be applied
    Move(MoveError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves { status } => {
                write!(f, "No legal moves available ({status})")
            }
            SearchError::Move(err) => write!(f, "Search aborted: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Move(err) => Some(err),
            SearchError::NoLegalMoves { .. } => None,
        }
    }
}

impl From<MoveError> for SearchError {
    fn from(err: MoveError) -> Self {
        SearchError::Move(err)
    }
}
