//! Move execution: board-level piece relocation shared by simulation and
//! commit, and the game-level commit that advances turn state.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::file::File;
use crate::game::Game;

impl Board {
    /// Relocate the moving piece in place, removing the captured pawn first if
    /// `mv` is an en passant capture under `en_passant`.
    ///
    /// No legality check is made.
    pub fn apply_move(&mut self, mv: Move, en_passant: Option<File>) {
        if mv.is_en_passant(self, en_passant) {
            self.clear(mv.en_passant_victim());
        }
        self.put(mv.dest(), mv.piece());
        self.clear(mv.source());
    }

    /// Copy-make: return the board after `mv`, leaving `self` unchanged.
    pub fn after_move(&self, mv: Move, en_passant: Option<File>) -> Board {
        let mut b = *self;
        b.apply_move(mv, en_passant);
        b
    }
}

impl Game {
    /// Commit `mv`, which must come from [`Game::legal_moves`].
    ///
    /// Moves the piece, flips the side to move, and opens the en passant file
    /// after a double push (closing it after anything else).
    pub fn apply(&mut self, mv: Move) {
        let mover = self.side_to_move();
        let open_file = self.en_passant();
        self.board_mut().apply_move(mv, open_file);

        // The window lasts exactly one reply, used or not.
        let en_passant = mv.is_double_push().then(|| mv.source().file());
        self.set_en_passant(en_passant);

        if mover == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        self.set_side_to_move(mover.flip());

        debug!(token = %mv, side = %mover, en_passant = ?en_passant, "move applied");
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::file::File;
    use crate::game::Game;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn quiet_move_relocates_piece() {
        let mut board = Board::starting_position();
        board.apply_move(Move::new(Piece::WHITE_KNIGHT, sq("g1"), sq("f3")), None);
        assert_eq!(board.piece_on(sq("f3")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.piece_on(sq("g1")), None);
    }

    #[test]
    fn capture_overwrites_occupant() {
        let mut board = Board::EMPTY;
        board.put(sq("d4"), Piece::WHITE_ROOK);
        board.put(sq("d7"), Piece::BLACK_KNIGHT);
        board.apply_move(Move::new_capture(Piece::WHITE_ROOK, sq("d4"), sq("d7")), None);
        assert_eq!(board.piece_on(sq("d7")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn en_passant_removes_pawn_beside_mover() {
        let mut board = Board::EMPTY;
        board.put(sq("e5"), Piece::WHITE_PAWN);
        board.put(sq("f5"), Piece::BLACK_PAWN);
        board.apply_move(
            Move::new_capture(Piece::WHITE_PAWN, sq("e5"), sq("f6")),
            Some(File::FileF),
        );
        assert_eq!(board.piece_on(sq("f6")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_on(sq("f5")), None);
        assert_eq!(board.piece_on(sq("e5")), None);
    }

    #[test]
    fn after_move_leaves_original_alone() {
        let board = Board::starting_position();
        let after = board.after_move(Move::new(Piece::WHITE_PAWN, sq("e2"), sq("e4")), None);
        assert_eq!(board, Board::starting_position());
        assert_eq!(after.piece_on(sq("e4")), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn double_push_opens_file_and_next_move_closes_it() {
        let mut game = Game::standard();
        game.apply(Move::new(Piece::WHITE_PAWN, sq("e2"), sq("e4")));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.en_passant(), Some(File::FileE));

        game.apply(Move::new(Piece::BLACK_KNIGHT, sq("g8"), sq("f6")));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.en_passant(), None);
    }

    #[test]
    fn single_push_does_not_open_file() {
        let mut game = Game::standard();
        game.apply(Move::new(Piece::WHITE_PAWN, sq("e2"), sq("e3")));
        assert_eq!(game.en_passant(), None);
    }

    #[test]
    fn fullmove_increments_after_black() {
        let mut game = Game::standard();
        assert_eq!(game.fullmove_number(), 1);
        game.apply(Move::new(Piece::WHITE_PAWN, sq("d2"), sq("d4")));
        assert_eq!(game.fullmove_number(), 1);
        game.apply(Move::new(Piece::BLACK_PAWN, sq("d7"), sq("d5")));
        assert_eq!(game.fullmove_number(), 2);
    }
}
