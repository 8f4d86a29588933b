//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal knight jumps from `src`.
pub(super) fn gen_knight(board: &Board, src: Square, knight: Piece, list: &mut MoveList) {
    for jump in Direction::KNIGHT_JUMPS {
        let Some(dst) = src.offset(jump) else {
            continue;
        };
        match board.piece_on(dst) {
            None => list.push(Move::new(knight, src, dst)),
            Some(target) if target.is_enemy_of(knight.color()) => {
                list.push(Move::new_capture(knight, src, dst));
            }
            Some(_) => {}
        }
    }
}
