//! Session command errors.

use rookery_core::FenError;

/// Errors that can occur while parsing or running a session command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it was rejected.
        #[source]
        source: FenError,
    },

    /// A move token matched no legal move.
    #[error("invalid move: {token}")]
    InvalidMove {
        /// The rejected token.
        token: String,
    },

    /// The depth value in `perft` could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given something other than `on` or `off`.
    #[error("invalid value for {name}: {value} (expected on or off)")]
    InvalidOptionValue {
        /// The option being set.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
