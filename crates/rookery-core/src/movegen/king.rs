//! King move generation. There is no castling.

use crate::board::Board;
use crate::chess_move::Move;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal single steps for the king on `src`.
///
/// Steps into attacked squares are left for the legality filter to reject.
pub(super) fn gen_king(board: &Board, src: Square, king: Piece, list: &mut MoveList) {
    for dir in Direction::ALL {
        let Some(dst) = src.offset(dir) else {
            continue;
        };
        match board.piece_on(dst) {
            None => list.push(Move::new(king, src, dst)),
            Some(target) if target.is_enemy_of(king.color()) => {
                list.push(Move::new_capture(king, src, dst));
            }
            Some(_) => {}
        }
    }
}
