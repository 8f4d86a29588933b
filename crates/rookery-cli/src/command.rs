//! Session command parsing.

use rookery_core::Game;

use crate::error::CliError;

/// Deepest `perft` the session will run.
pub const MAX_PERFT_DEPTH: usize = 6;

/// A session option toggled with `set <option> <on|off>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after each committed move.
    Board,
    /// List legal move tokens after each committed move.
    Moves,
}

impl SessionOption {
    fn parse(name: &str) -> Result<SessionOption, CliError> {
        match name {
            "board" => Ok(SessionOption::Board),
            "moves" => Ok(SessionOption::Moves),
            other => Err(CliError::UnknownOption {
                name: other.to_string(),
            }),
        }
    }
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- reset to the standard starting layout.
    New,
    /// `position` -- set up a position with optional moves already played.
    Position(Game),
    /// `move <token>` or a bare token -- play a move.
    Move(String),
    /// `moves` -- list legal move tokens.
    Moves,
    /// `board` -- print the board grid.
    Board,
    /// `fen` -- print the current position as FEN.
    Fen,
    /// `perft <depth>` -- count leaf nodes with a per-move breakdown.
    Perft(usize),
    /// `set <option> <on|off>` -- toggle a session option.
    Set(SessionOption, bool),
    /// `help` -- print usage.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
///
/// A line whose first word is not a command word is taken as a move token.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Empty);
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "moves" => Ok(Command::Moves),
        "board" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "perft" => parse_perft(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        "move" => match &tokens[1..] {
            [token] => Ok(Command::Move(token.to_string())),
            rest => Err(CliError::InvalidMove {
                token: rest.join(" "),
            }),
        },
        _ => Ok(Command::Move(tokens.join(" "))),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e4 e5 ...]`
/// - `position fen <fen-string> [moves e4 e5 ...]`, with 4 or 6 FEN fields
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    let (mut game, rest) = match tokens.first() {
        Some(&"startpos") => (Game::standard(), &tokens[1..]),
        Some(&"fen") => {
            let fields = &tokens[1..];
            let end = fields.iter().position(|&t| t == "moves").unwrap_or(fields.len());
            let fen = fields[..end].join(" ");
            let game: Game = fen.parse().map_err(|source| CliError::InvalidFen {
                fen: fen.clone(),
                source,
            })?;
            (game, &fields[end..])
        }
        _ => return Err(CliError::MalformedPosition),
    };

    // Play moves if present: "moves e4 e5 ..."
    match rest {
        [] => {}
        ["moves", tokens @ ..] => {
            for token in tokens {
                game.play(token).map_err(|_| CliError::InvalidMove {
                    token: token.to_string(),
                })?;
            }
        }
        _ => return Err(CliError::MalformedPosition),
    }

    Ok(Command::Position(game))
}

fn parse_perft(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens.first().copied().unwrap_or("");
    let invalid = || CliError::InvalidDepth {
        value: value.to_string(),
    };
    let depth: usize = value.parse().map_err(|_| invalid())?;
    if depth > MAX_PERFT_DEPTH || tokens.len() > 1 {
        return Err(invalid());
    }
    Ok(Command::Perft(depth))
}

fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let [name, value] = tokens else {
        return Err(CliError::UnknownOption {
            name: tokens.join(" "),
        });
    };
    let option = SessionOption::parse(name)?;
    let enabled = match *value {
        "on" => true,
        "off" => false,
        other => {
            return Err(CliError::InvalidOptionValue {
                name: name.to_string(),
                value: other.to_string(),
            });
        }
    };
    Ok(Command::Set(option, enabled))
}
