//! Game state: the board plus whose turn it is and the open en passant file.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::GameError;
use crate::file::File;
use crate::movegen::{self, MoveList};

/// A game in progress.
///
/// Owns its board exclusively. Every mutation goes through [`Game::play`] or
/// [`Game::apply`]; callers sharing a game across threads must serialize
/// access themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    /// File of a pawn that just double-pushed, capturable en passant by the
    /// very next move only.
    en_passant: Option<File>,
    /// Starts at 1, incremented after each Black move.
    fullmove_number: u16,
}

impl Game {
    /// Start a game from a supplied initial layout, White to move.
    ///
    /// # Errors
    ///
    /// [`GameError::MalformedInitialPosition`] unless `board` is exactly the
    /// standard starting layout.
    pub fn new(board: Board) -> Result<Game, GameError> {
        board.validate_starting_layout()?;
        Ok(Game::from_parts(board, Color::White, None, 1))
    }

    /// Start a game from the standard layout.
    pub fn standard() -> Game {
        Game::from_parts(Board::starting_position(), Color::White, None, 1)
    }

    /// Assemble a game without validation. Used by FEN parsing.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        en_passant: Option<File>,
        fullmove_number: u16,
    ) -> Game {
        Game {
            board,
            side_to_move,
            en_passant,
            fullmove_number,
        }
    }

    /// Read-only view of the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The file on which an en passant capture is currently possible.
    #[inline]
    pub fn en_passant(&self) -> Option<File> {
        self.en_passant
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, file: Option<File>) {
        self.en_passant = file;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Every move matching a piece template, king safety ignored.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        movegen::generate_pseudo_legal_moves(&self.board, self.side_to_move, self.en_passant)
    }

    /// Every legal move for the side to move. Empty means the game is over.
    pub fn legal_moves(&self) -> MoveList {
        movegen::generate_legal_moves(&self.board, self.side_to_move, self.en_passant)
    }

    /// Return `true` if `mv` would not leave the mover's king attacked.
    pub fn is_legal(&self, mv: Move) -> bool {
        movegen::is_legal(&self.board, self.en_passant, mv)
    }

    /// Resolve `token` against the legal moves and commit the match.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidToken`] if no legal move encodes as `token`; the
    /// game is left untouched.
    pub fn play(&mut self, token: &str) -> Result<Move, GameError> {
        let mv = self
            .legal_moves()
            .find_token(token)
            .ok_or_else(|| GameError::InvalidToken {
                token: token.to_string(),
            })?;
        self.apply(mv);

        if self.is_game_over() {
            debug!(side = %self.side_to_move, "no legal moves remain");
        }
        Ok(mv)
    }

    /// Return `true` when the side to move has no legal moves.
    ///
    /// Checkmate and stalemate are not told apart.
    pub fn is_game_over(&self) -> bool {
        self.legal_moves().is_empty()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{BoardError, GameError};
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_accepts_standard_layout() {
        let game = Game::new(Board::starting_position()).unwrap();
        assert_eq!(game, Game::standard());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.en_passant(), None);
    }

    #[test]
    fn new_rejects_malformed_layout() {
        let mut board = Board::starting_position();
        board.put(sq("e1"), Piece::WHITE_QUEEN);
        let err = Game::new(board).unwrap_err();
        assert_eq!(
            err,
            GameError::MalformedInitialPosition {
                source: BoardError::InvalidKingCount { color: "white", count: 0 }
            }
        );
    }

    #[test]
    fn play_commits_matching_token() {
        let mut game = Game::standard();
        let mv = game.play("Nf3").unwrap();
        assert_eq!(mv.source(), sq("g1"));
        assert_eq!(game.board().piece_on(sq("f3")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn play_rejects_unknown_token_without_mutation() {
        let mut game = Game::standard();
        let before = game;
        for token in ["e5", "Nf4", "Ke2", "", "xx", "E4"] {
            let err = game.play(token).unwrap_err();
            assert_eq!(err, GameError::InvalidToken { token: token.to_string() });
            assert_eq!(game, before, "rejected {token:?} must not change the game");
        }
    }

    #[test]
    fn starting_position_is_not_over() {
        assert!(!Game::standard().is_game_over());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::standard();
        for token in ["f3", "e5", "g4", "Qh4"] {
            game.play(token).unwrap();
        }
        assert!(game.is_game_over());
        assert!(game.legal_moves().is_empty());
        assert!(game.board().is_king_attacked(Color::White));
    }
}
