//! Line-oriented session over a single game.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use kibitz_core::{Game, PieceKind, perft};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::TextError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Draw pieces with Unicode glyphs.
    pub unicode: bool,
    /// Print the board after every committed move.
    pub autoboard: bool,
}

/// What the session does after handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to write back, possibly spanning several lines.
    Output(String),
    /// Nothing to write.
    Silent,
    /// End the session.
    Quit,
}

/// A text session holding the current game.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the starting position with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `output`.
    ///
    /// Command errors are reported as `error: <message>` lines and the session
    /// continues. Only I/O failures end the loop with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), TextError> {
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Reply::Output(text) => writeln!(output, "{text}")?,
                Reply::Silent => {}
                Reply::Quit => break,
            }
        }
        output.flush()?;
        info!("session closed");
        Ok(())
    }

    /// Parse and execute one line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            debug!(cmd = %trimmed, "received command");
        }
        match parse_command(trimmed).and_then(|cmd| self.execute(cmd)) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, line = %trimmed, "command failed");
                Reply::Output(format!("error: {e}"))
            }
        }
    }

    fn execute(&mut self, cmd: Command) -> Result<Reply, TextError> {
        let reply = match cmd {
            Command::New => {
                self.game = Game::new();
                ok()
            }
            Command::ShowFen => Reply::Output(self.game.to_fen()),
            Command::LoadFen(game) => {
                self.game = game;
                ok()
            }
            Command::Moves(from) => {
                let dests = self.game.legal_destinations(from)?;
                let mut text = String::from("moves");
                for to in dests {
                    text.push(' ');
                    text.push_str(&to.to_string());
                }
                Reply::Output(text)
            }
            Command::Move {
                from,
                to,
                promotion,
            } => {
                let promoting = self.game.board().piece_at(from).is_some_and(|piece| {
                    piece.kind() == PieceKind::Pawn && to.row() == piece.color().promotion_row()
                });
                let mut chooser = promotion;
                self.game.commit(from, to, &mut chooser)?;
                let mut text = String::from("ok");
                if promoting && let Some(piece) = self.game.board().piece_at(to) {
                    text.push_str(&format!(" (promoted to {})", piece.kind()));
                }
                if self.config.autoboard {
                    text.push('\n');
                    text.push_str(&self.render_board());
                }
                Reply::Output(text)
            }
            Command::Board => Reply::Output(self.render_board()),
            Command::Turn => Reply::Output(self.game.current_turn().name().to_string()),
            Command::Set(option) => {
                match option {
                    SessionOption::Unicode(on) => self.config.unicode = on,
                    SessionOption::Autoboard(on) => self.config.autoboard = on,
                }
                ok()
            }
            Command::Perft(depth) => Reply::Output(format!("nodes {}", perft(&self.game, depth))),
            Command::Quit => Reply::Quit,
            Command::Empty => Reply::Silent,
        };
        Ok(reply)
    }

    fn render_board(&self) -> String {
        let board = self.game.board();
        if self.config.unicode {
            board.pretty_glyphs().to_string()
        } else {
            board.pretty().to_string()
        }
    }
}

fn ok() -> Reply {
    Reply::Output("ok".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kibitz_core::Color;

    fn output(reply: Reply) -> String {
        match reply {
            Reply::Output(text) => text,
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn moves_lists_ascending_squares() {
        let mut session = Session::new();
        assert_eq!(output(session.handle_line("moves g1")), "moves f3 h3");
        assert_eq!(output(session.handle_line("moves e2")), "moves e4 e3");
    }

    #[test]
    fn blocked_piece_lists_nothing() {
        let mut session = Session::new();
        assert_eq!(output(session.handle_line("moves a1")), "moves");
    }

    #[test]
    fn move_then_turn() {
        let mut session = Session::new();
        assert_eq!(output(session.handle_line("move e2 e4")), "ok");
        assert_eq!(output(session.handle_line("turn")), "black");
        assert_eq!(session.game().current_turn(), Color::Black);
    }

    #[test]
    fn errors_keep_session_alive() {
        let mut session = Session::new();
        assert_eq!(
            output(session.handle_line("move e7 e5")),
            "error: piece on e7 belongs to black, but it is white's turn"
        );
        assert_eq!(output(session.handle_line("move e2 e5")), "error: e2 cannot move to e5");
        assert_eq!(output(session.handle_line("turn")), "white");
    }

    #[test]
    fn set_changes_config() {
        let mut session = Session::new();
        assert_eq!(session.config(), SessionConfig::default());
        output(session.handle_line("set unicode on"));
        output(session.handle_line("set autoboard on"));
        assert_eq!(
            session.config(),
            SessionConfig {
                unicode: true,
                autoboard: true
            }
        );
        let reply = output(session.handle_line("move g1 f3"));
        assert!(reply.starts_with("ok\n8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
    }

    #[test]
    fn quit_and_blank_lines() {
        let mut session = Session::new();
        assert_eq!(session.handle_line(""), Reply::Silent);
        assert_eq!(session.handle_line("quit"), Reply::Quit);
    }

    #[test]
    fn promotion_reply_names_the_piece() {
        let mut session = Session::new();
        output(session.handle_line("fen 4k3/P7/8/8/8/8/7p/4K3 w - - 0 1"));
        assert_eq!(
            output(session.handle_line("move a7 a8 x")),
            "ok (promoted to queen)"
        );
        assert_eq!(
            output(session.handle_line("move h2 h1 r")),
            "ok (promoted to rook)"
        );
        assert_eq!(output(session.handle_line("move e1 d2")), "ok");
    }

    #[test]
    fn perft_reports_nodes() {
        let mut session = Session::new();
        assert_eq!(output(session.handle_line("perft 2")), "nodes 400");
    }
}
