//! The 8x8 piece grid: construction, queries, validation, and rendering.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement. Row 0 is rank 1, column 0 is the a-file.
///
/// The board is a plain `Copy` value: legality checks simulate moves on a
/// copy and never touch the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; File::COUNT]; Rank::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const EMPTY: Board = Board {
        cells: [[None; File::COUNT]; Rank::COUNT],
    };

    /// Return a fresh copy of the standard starting layout.
    pub fn starting_position() -> Board {
        let mut board = Board::EMPTY;
        for color in Color::ALL {
            for file in File::ALL {
                let back = Square::new(color.back_rank(), file);
                let pawn = Square::new(color.pawn_rank(), file);
                board.put(back, Piece::new(BACK_RANK[file.index()], color));
                board.put(pawn, Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Build a board from a layout table given rank 1 first, a-file first.
    ///
    /// Only the table's shape is checked here; see [`Board::validate`] and
    /// [`Board::validate_starting_layout`] for content checks.
    pub fn from_rows<R: AsRef<[Option<Piece>]>>(rows: &[R]) -> Result<Board, BoardError> {
        if rows.len() != Rank::COUNT {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }
        let mut board = Board::EMPTY;
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != File::COUNT {
                return Err(BoardError::WrongRowLength {
                    row,
                    found: cells.len(),
                });
            }
            board.cells[row].copy_from_slice(cells);
        }
        Ok(board)
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.rank().index()][sq.file().index()]
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_on(sq).is_some()
    }

    /// Place `piece` on `sq`, replacing any occupant.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.rank().index()][sq.file().index()] = Some(piece);
    }

    /// Empty `sq`.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.rank().index()][sq.file().index()] = None;
    }

    /// Iterate over occupied squares in a1..h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Number of squares holding exactly `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }

    /// Return the square of `color`'s king, `None` only on an invalid board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Check the invariant every playable position keeps: one king per side.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count(Piece::new(PieceKind::King, color));
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }
        Ok(())
    }

    /// Check that this board is exactly the standard starting layout.
    ///
    /// Kings are checked first, then per-kind counts, then that every piece
    /// stands on its standard square.
    pub fn validate_starting_layout(&self) -> Result<(), BoardError> {
        self.validate()?;

        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let expected = kind.starting_count();
                let found = self.count(Piece::new(kind, color));
                if found != expected {
                    return Err(BoardError::WrongPieceCount {
                        color: color.name(),
                        kind: kind.name(),
                        expected,
                        found,
                    });
                }
            }
        }

        // With the counts right, every standard square being filled correctly
        // also means every other square is empty.
        for (square, piece) in Board::starting_position().pieces() {
            if self.piece_on(square) != Some(piece) {
                return Err(BoardError::MisplacedPiece {
                    square,
                    color: piece.color().name(),
                    kind: piece.kind().name(),
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"")?;
        self.write_placement(f)?;
        write!(f, "\")")
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = self
                    .0
                    .piece_on(Square::new(rank, file))
                    .map_or('.', Piece::fen_char);
                if file == File::FileH {
                    write!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
