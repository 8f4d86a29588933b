//! Core chess rules: board model, move generation, legality, and game state.
//!
//! Castling, promotion, and draw rules are not part of this rule set.

mod attacks;
mod board;
mod chess_move;
mod color;
mod direction;
mod error;
mod fen;
mod file;
mod game;
mod make_move;
mod movegen;
pub mod notation;
mod perft;
mod piece;
mod piece_kind;
mod rank;
mod square;

pub use attacks::is_square_attacked;
pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use direction::Direction;
pub use error::{BoardError, FenError, GameError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use game::Game;
pub use movegen::{generate_legal_moves, generate_pseudo_legal_moves, is_legal, MoveList};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
