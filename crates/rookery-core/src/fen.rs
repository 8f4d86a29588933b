//! FEN string parsing and serialization for [`Game`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling letters accepted (and ignored) in the third field.
const CASTLING_CHARS: &str = "KQkq";

/// The square a capturing pawn of `side` lands on when taking en passant on
/// `file`.
fn en_passant_target(side: Color, file: File) -> Option<Square> {
    let rank = side.en_passant_rank().offset(side.forward())?;
    Some(Square::new(rank, file))
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != Rank::COUNT {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::EMPTY;
    // FEN ranks go from 8 to 1 (top to bottom)
    for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
        let mut file_index = 0usize;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let Some(file) = File::ALL.get(file_index).copied() else {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                });
            };
            board.put(Square::new(rank, file), piece);
            file_index += 1;
        }

        if file_index != File::COUNT {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }

    Ok(board)
}

fn parse_castling(field: &str) -> Result<(), FenError> {
    if field == "-" {
        return Ok(());
    }
    match field.chars().find(|&c| !CASTLING_CHARS.contains(c)) {
        Some(character) => Err(FenError::InvalidCastlingChar { character }),
        None => Ok(()),
    }
}

/// Parse the en passant field, keeping only the file.
///
/// The target must be the square a pawn of `side_to_move` would capture onto,
/// it must be empty, and the enemy pawn that just double-pushed must stand
/// directly behind it.
fn parse_en_passant(field: &str, board: &Board, side_to_move: Color) -> Result<Option<File>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target = Square::from_algebraic(field).ok_or_else(invalid)?;
    if en_passant_target(side_to_move, target.file()) != Some(target) || board.is_occupied(target) {
        return Err(invalid());
    }

    let victim = Square::new(side_to_move.en_passant_rank(), target.file());
    let enemy_pawn = Piece::new(PieceKind::Pawn, side_to_move.flip());
    if board.piece_on(victim) != Some(enemy_pawn) {
        return Err(invalid());
    }

    Ok(Some(target.file()))
}

fn parse_counter(field: &'static str, text: &str) -> Result<u16, FenError> {
    text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Game {
    type Err = FenError;

    /// Parse a FEN string with 4 or 6 fields.
    ///
    /// The castling field is accepted for compatibility and ignored, as is
    /// the halfmove clock.
    fn from_str(fen: &str) -> Result<Game, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        parse_castling(fields[2])?;
        let en_passant = parse_en_passant(fields[3], &board, side_to_move)?;

        let fullmove_number = if fields.len() == 6 {
            parse_counter("halfmove clock", fields[4])?;
            parse_counter("fullmove number", fields[5])?.max(1)
        } else {
            1
        };

        board.validate()?;
        if board.is_king_attacked(side_to_move.flip()) {
            return Err(FenError::OpponentInCheck);
        }

        Ok(Game::from_parts(board, side_to_move, en_passant, fullmove_number))
    }
}

impl Board {
    /// Write the piece placement field (rank 8 first).
    pub(crate) fn write_placement(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            let mut empty_count = 0;
            for file in File::ALL {
                match self.piece_on(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board().write_placement(f)?;
        write!(f, " {} -", self.side_to_move())?;

        match self
            .en_passant()
            .and_then(|file| en_passant_target(self.side_to_move(), file))
        {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " 0 {}", self.fullmove_number())
    }
}
