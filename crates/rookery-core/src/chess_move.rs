//! Candidate moves.

use std::fmt;

use crate::board::Board;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move produced by the generator: which piece goes where, and whether it
/// captures.
///
/// Moves are snapshots taken against one position. They are only meaningful
/// for the position that produced them and should not be kept across turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    source: Square,
    dest: Square,
    capture: bool,
}

impl Move {
    /// Create a non-capturing move.
    #[inline]
    pub const fn new(piece: Piece, source: Square, dest: Square) -> Move {
        Move {
            piece,
            source,
            dest,
            capture: false,
        }
    }

    /// Create a capturing move. En passant captures land on an empty square.
    #[inline]
    pub const fn new_capture(piece: Piece, source: Square, dest: Square) -> Move {
        Move {
            piece,
            source,
            dest,
            capture: true,
        }
    }

    /// The moving piece as it stood on the source square.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture
    }

    /// `true` for a pawn advancing two ranks.
    pub fn is_double_push(self) -> bool {
        self.piece.kind() == PieceKind::Pawn
            && self.source.rank().index().abs_diff(self.dest.rank().index()) == 2
    }

    /// `true` if this move, played on `board` with `en_passant` as the open
    /// file, is an en passant capture.
    ///
    /// That is a diagonal pawn move from the en passant rank onto the empty
    /// square of the open file.
    pub fn is_en_passant(self, board: &Board, en_passant: Option<File>) -> bool {
        let color = self.piece.color();
        self.piece.kind() == PieceKind::Pawn
            && self.source.file() != self.dest.file()
            && self.source.rank() == color.en_passant_rank()
            && en_passant == Some(self.dest.file())
            && !board.is_occupied(self.dest)
    }

    /// The square of the pawn removed by an en passant capture: on the
    /// mover's rank, in the destination's file.
    #[inline]
    pub(crate) fn en_passant_victim(self) -> Square {
        Square::new(self.source.rank(), self.dest.file())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {:?} {}{})",
            self,
            self.piece,
            self.source,
            self.dest
        )
    }
}
