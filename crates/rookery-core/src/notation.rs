//! Short move tokens: encoding moves and resolving typed text against the
//! legal move list.
//!
//! Token grammar:
//!
//! ```text
//! pawn push      e4        destination only
//! pawn capture   exd5      origin file, 'x', destination
//! piece move     Nf3       piece letter, destination
//! piece capture  Bxf7      piece letter, 'x', destination
//! ```
//!
//! Tokens do not disambiguate: if two knights can both reach f3, both moves
//! encode as `Nf3` and decoding picks the first one generated.

use std::fmt;

use crate::chess_move::Move;

/// Capture marker between the origin and destination parts of a token.
pub const CAPTURE_MARKER: char = 'x';

impl Move {
    /// Encode this move as a token.
    pub fn token(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece().kind().letter() {
            None if self.is_capture() => {
                write!(f, "{}{}", self.source().file(), CAPTURE_MARKER)?;
            }
            None => {}
            Some(letter) => {
                write!(f, "{letter}")?;
                if self.is_capture() {
                    write!(f, "{CAPTURE_MARKER}")?;
                }
            }
        }
        write!(f, "{}", self.dest())
    }
}

/// Return the first move in `moves` whose token is exactly `token`.
pub fn find_token<'a, I>(moves: I, token: &str) -> Option<Move>
where
    I: IntoIterator<Item = &'a Move>,
{
    moves.into_iter().copied().find(|mv| mv.token() == token)
}

/// `true` if more than one move in `moves` encodes as `token`.
pub fn is_ambiguous<'a, I>(moves: I, token: &str) -> bool
where
    I: IntoIterator<Item = &'a Move>,
{
    moves.into_iter().filter(|mv| mv.token() == token).nth(1).is_some()
}
