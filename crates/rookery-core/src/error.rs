//! Error types for board construction, FEN parsing, and move entry.

use std::fmt;

use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string has neither 4 nor 6 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based position in the placement (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling field.
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a target square consistent with
    /// the position.
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The side that just moved is still in check.
    OpponentInCheck,
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 4 or 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidCastlingChar { character } => {
                write!(f, "invalid castling character: '{character}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidMoveCounter { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
            FenError::OpponentInCheck => {
                write!(f, "side not to move is in check")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The layout table does not have 8 rows.
    #[error("expected 8 rows in layout, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A layout row does not have 8 cells.
    #[error("row {row} has {found} cells, expected 8")]
    WrongRowLength {
        /// Zero-based row index (0 = rank 1).
        row: usize,
        /// Number of cells found.
        found: usize,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// A side has the wrong number of some piece kind for a starting layout.
    #[error("expected {expected} {color} {kind}(s), found {found}")]
    WrongPieceCount {
        color: &'static str,
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    /// A starting-layout square does not hold its standard piece.
    #[error("{square} does not hold the {color} {kind} of the starting layout")]
    MisplacedPiece {
        square: Square,
        color: &'static str,
        kind: &'static str,
    },
}

/// Errors reported by [`Game`](crate::game::Game) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move text matches no currently legal move. The game is unchanged.
    #[error("no legal move matches \"{token}\"")]
    InvalidToken {
        /// The rejected move text.
        token: String,
    },
    /// The supplied starting layout is not the standard one.
    #[error("malformed initial position: {source}")]
    MalformedInitialPosition {
        /// What the layout check found.
        #[from]
        source: BoardError,
    },
}
