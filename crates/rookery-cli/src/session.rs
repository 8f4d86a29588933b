//! Interactive play session: reads command lines, writes results.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Game, divide};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;

const HELP: &str = "\
commands:
  new                               start a new game
  position startpos [moves ...]     set up the start position and play moves
  position fen <fen> [moves ...]    set up a FEN position and play moves
  move <token> | <token>            play a move, e.g. e4, exd5, Nf3, Qxf7
  moves                             list legal moves
  board                             print the board
  fen                               print the position as FEN
  perft <depth>                     count move paths to <depth>
  set <board|moves> <on|off>        toggle printing after each move
  help                              show this text
  quit                              leave";

/// Options adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after each committed move.
    pub show_board: bool,
    /// List legal move tokens after each committed move.
    pub show_moves: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_moves: false,
        }
    }
}

/// A single game driven by text commands.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session on the standard starting position.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: Game::standard(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the session, reading lines from `input` until `quit` or end of
    /// input. Command errors are reported on `out` and the session goes on;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, out)?,
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }
        info!("session finished");
        Ok(())
    }

    /// Execute one parsed command, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), CliError> {
        match cmd {
            Command::New => self.handle_position(Game::standard(), out),
            Command::Position(game) => self.handle_position(game, out),
            Command::Move(token) => self.handle_move(&token, out),
            Command::Moves => self.handle_moves(out),
            Command::Board => self.handle_board(out),
            Command::Fen => {
                writeln!(out, "{}", self.game)?;
                Ok(())
            }
            Command::Perft(depth) => self.handle_perft(depth, out),
            Command::Set(option, enabled) => {
                self.handle_set(option, enabled);
                Ok(())
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            Command::Quit | Command::Empty => Ok(()),
        }
    }

    fn handle_position<W: Write>(&mut self, game: Game, out: &mut W) -> Result<(), CliError> {
        self.game = game;
        if self.config.show_board {
            self.handle_board(out)?;
        }
        self.report_game_over(out)
    }

    fn handle_move<W: Write>(&mut self, token: &str, out: &mut W) -> Result<(), CliError> {
        let mv = match self.game.play(token) {
            Ok(mv) => mv,
            Err(e) => {
                warn!(error = %e, "move rejected");
                let err = CliError::InvalidMove {
                    token: token.to_string(),
                };
                writeln!(out, "error: {err}")?;
                return Ok(());
            }
        };

        writeln!(out, "played {mv}")?;
        if self.config.show_board {
            self.handle_board(out)?;
        }
        if self.config.show_moves {
            self.handle_moves(out)?;
        }
        self.report_game_over(out)
    }

    fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let tokens = self.game.legal_moves().tokens();
        if tokens.is_empty() {
            writeln!(out, "no legal moves")?;
        } else {
            writeln!(out, "{}", tokens.join(" "))?;
        }
        Ok(())
    }

    fn handle_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        writeln!(out, "{}", self.game.board().pretty())?;
        writeln!(out, "{} to move", self.game.side_to_move().name())?;
        Ok(())
    }

    fn handle_perft<W: Write>(&self, depth: usize, out: &mut W) -> Result<(), CliError> {
        let results = divide(&self.game, depth);
        let total: u64 = if depth == 0 {
            1
        } else {
            results.iter().map(|(_, n)| n).sum()
        };
        if depth > 0 {
            for (token, count) in &results {
                writeln!(out, "{token}: {count}")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "nodes: {total}")?;
        debug!(depth, nodes = total, "perft finished");
        Ok(())
    }

    fn handle_set(&mut self, option: SessionOption, enabled: bool) {
        match option {
            SessionOption::Board => self.config.show_board = enabled,
            SessionOption::Moves => self.config.show_moves = enabled,
        }
        debug!(?option, enabled, "option set");
    }

    fn report_game_over<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if self.game.is_game_over() {
            info!(side = %self.game.side_to_move(), "game over");
            writeln!(
                out,
                "game over: {} has no legal moves",
                self.game.side_to_move().name()
            )?;
        }
        Ok(())
    }
}
