//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

/// Walk each ray in `rays` from `src`, one square at a time.
///
/// A ray ends before the board edge or a friendly piece, and ends on (as a
/// capture) the first enemy piece.
pub(super) fn gen_slider(
    board: &Board,
    src: Square,
    slider: Piece,
    rays: &[Direction],
    list: &mut MoveList,
) {
    for &dir in rays {
        let mut sq = src;
        while let Some(dst) = sq.offset(dir) {
            match board.piece_on(dst) {
                None => list.push(Move::new(slider, src, dst)),
                Some(target) => {
                    if target.is_enemy_of(slider.color()) {
                        list.push(Move::new_capture(slider, src, dst));
                    }
                    break;
                }
            }
            sq = dst;
        }
    }
}
