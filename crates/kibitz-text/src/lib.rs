//! Line-oriented text front end for the kibitz rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, MAX_PERFT_DEPTH, SessionOption, parse_command};
pub use error::TextError;
pub use session::{Reply, Session, SessionConfig};
