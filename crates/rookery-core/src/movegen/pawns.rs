//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::direction::Direction;
use crate::file::File;
use crate::piece::Piece;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal moves for the pawn `pawn` standing on `src`.
///
/// A pawn on the far rank has nowhere to go and yields nothing.
pub(super) fn gen_pawn(
    board: &Board,
    en_passant: Option<File>,
    src: Square,
    pawn: Piece,
    list: &mut MoveList,
) {
    let us = pawn.color();
    let step = Direction::new(us.forward(), 0);

    // --- Pushes ---
    if let Some(single) = src.offset(step)
        && !board.is_occupied(single)
    {
        list.push(Move::new(pawn, src, single));

        if src.rank() == us.pawn_rank()
            && let Some(double) = single.offset(step)
            && !board.is_occupied(double)
        {
            list.push(Move::new(pawn, src, double));
        }
    }

    // --- Captures, including en passant onto the empty square ---
    for d_file in [-1, 1] {
        let Some(dst) = src.offset(Direction::new(us.forward(), d_file)) else {
            continue;
        };
        match board.piece_on(dst) {
            Some(target) if target.is_enemy_of(us) => {
                list.push(Move::new_capture(pawn, src, dst));
            }
            Some(_) => {}
            None => {
                if src.rank() == us.en_passant_rank() && en_passant == Some(dst.file()) {
                    list.push(Move::new_capture(pawn, src, dst));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_pawn;
    use crate::board::Board;
    use crate::file::File;
    use crate::movegen::MoveList;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn tokens(board: &Board, en_passant: Option<File>, from: &str) -> Vec<String> {
        let src = sq(from);
        let pawn = board.piece_on(src).unwrap();
        let mut list = MoveList::new();
        gen_pawn(board, en_passant, src, pawn, &mut list);
        let mut tokens = list.tokens();
        tokens.sort();
        tokens
    }

    #[test]
    fn single_and_double_push_from_start() {
        let board = Board::starting_position();
        assert_eq!(tokens(&board, None, "e2"), ["e3", "e4"]);
        assert_eq!(tokens(&board, None, "d7"), ["d5", "d6"]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut board = Board::starting_position();
        board.put(sq("e4"), Piece::BLACK_KNIGHT);
        assert_eq!(tokens(&board, None, "e2"), ["e3"]);

        board.clear(sq("e4"));
        board.put(sq("e3"), Piece::BLACK_KNIGHT);
        assert!(tokens(&board, None, "e2").is_empty(), "blocked pawn cannot jump");
    }

    #[test]
    fn no_double_push_off_start_rank() {
        let mut board = Board::EMPTY;
        board.put(sq("e3"), Piece::WHITE_PAWN);
        assert_eq!(tokens(&board, None, "e3"), ["e4"]);
    }

    #[test]
    fn captures_need_enemy_occupant() {
        let mut board = Board::EMPTY;
        board.put(sq("e4"), Piece::WHITE_PAWN);
        board.put(sq("d5"), Piece::BLACK_BISHOP);
        board.put(sq("f5"), Piece::WHITE_KNIGHT);
        assert_eq!(tokens(&board, None, "e4"), ["e5", "exd5"]);
    }

    #[test]
    fn edge_pawn_captures_one_way() {
        let mut board = Board::EMPTY;
        board.put(sq("a6"), Piece::BLACK_PAWN);
        board.put(sq("b5"), Piece::WHITE_ROOK);
        assert_eq!(tokens(&board, None, "a6"), ["a5", "axb5"]);
    }

    #[test]
    fn en_passant_from_fifth_rank_only() {
        let mut board = Board::EMPTY;
        board.put(sq("e5"), Piece::WHITE_PAWN);
        board.put(sq("f5"), Piece::BLACK_PAWN);
        assert_eq!(tokens(&board, Some(File::FileF), "e5"), ["e6", "exf6"]);
        assert_eq!(tokens(&board, Some(File::FileC), "e5"), ["e6"]);
        assert_eq!(tokens(&board, None, "e5"), ["e6"]);

        let mut board = Board::EMPTY;
        board.put(sq("e4"), Piece::WHITE_PAWN);
        assert_eq!(tokens(&board, Some(File::FileF), "e4"), ["e5"]);
    }

    #[test]
    fn black_en_passant_from_fourth_rank() {
        let mut board = Board::EMPTY;
        board.put(sq("d4"), Piece::BLACK_PAWN);
        board.put(sq("c4"), Piece::WHITE_PAWN);
        assert_eq!(tokens(&board, Some(File::FileC), "d4"), ["d3", "dxc3"]);
    }

    #[test]
    fn far_rank_pawn_is_stuck() {
        let mut board = Board::EMPTY;
        board.put(sq("c8"), Piece::WHITE_PAWN);
        assert!(tokens(&board, None, "c8").is_empty());
    }
}
