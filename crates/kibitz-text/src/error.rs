//! Text session errors.

use kibitz_core::{FenError, RulesError};

/// Errors that can occur while handling a session command.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized command word.
        command: String,
    },

    /// A required argument is missing.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command that was given.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// A square argument is not an algebraic name such as `e4`.
    #[error("invalid square: {found}")]
    InvalidSquare {
        /// The string that failed to parse.
        found: String,
    },

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    InvalidOption {
        /// The option name.
        name: String,
    },

    /// `set` was given a value other than `on` or `off`.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The depth value in `perft` is not a number up to the session's limit.
    #[error("invalid perft depth: {value} (expected 0 to {max})", max = crate::command::MAX_PERFT_DEPTH)]
    InvalidDepth {
        /// The rejected depth string.
        value: String,
    },

    /// The position rejected the move.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// Failed to load a FEN string.
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
