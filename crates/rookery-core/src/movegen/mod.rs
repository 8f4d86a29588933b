//! Move generation: pseudo-legal templates per piece kind, then a
//! simulate-and-verify legality filter.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::Direction;
use crate::file::File;
use crate::notation;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// The moves generated for one position, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Return the first move whose token is exactly `token`.
    pub fn find_token(&self, token: &str) -> Option<Move> {
        notation::find_token(&self.moves, token)
    }

    /// Tokens of every move, in generation order.
    pub fn tokens(&self) -> Vec<String> {
        self.moves.iter().map(|mv| mv.token()).collect()
    }

    fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Expand the movement template of `piece` on `src`.
fn gen_piece(board: &Board, en_passant: Option<File>, src: Square, piece: Piece, list: &mut MoveList) {
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, en_passant, src, piece, list),
        PieceKind::Knight => gen_knight(board, src, piece, list),
        PieceKind::Bishop => gen_slider(board, src, piece, &Direction::DIAGONALS, list),
        PieceKind::Rook => gen_slider(board, src, piece, &Direction::ORTHOGONALS, list),
        PieceKind::Queen => gen_slider(board, src, piece, &Direction::ALL, list),
        PieceKind::King => gen_king(board, src, piece, list),
    }
}

/// Generate every move `side` could make ignoring the safety of its king.
///
/// Pieces are visited a1..h8, so the output order depends only on the inputs.
pub fn generate_pseudo_legal_moves(board: &Board, side: Color, en_passant: Option<File>) -> MoveList {
    let mut list = MoveList::new();
    for (src, piece) in board.pieces().filter(|(_, p)| p.color() == side) {
        gen_piece(board, en_passant, src, piece, &mut list);
    }
    list
}

/// Return `true` if playing `mv` does not leave the mover's king attacked.
///
/// The move is simulated on a copy of `board`; `board` itself is untouched.
pub fn is_legal(board: &Board, en_passant: Option<File>, mv: Move) -> bool {
    let scratch = board.after_move(mv, en_passant);
    !scratch.is_king_attacked(mv.piece().color())
}

/// Generate every legal move for `side`.
pub fn generate_legal_moves(board: &Board, side: Color, en_passant: Option<File>) -> MoveList {
    let mut list = generate_pseudo_legal_moves(board, side, en_passant);
    list.retain(|&mv| is_legal(board, en_passant, mv));
    list
}
