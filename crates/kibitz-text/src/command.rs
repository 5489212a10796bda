//! Session command parsing.

use kibitz_core::{Game, PromotionPiece, Square};

use crate::error::TextError;

/// Deepest `perft` a session will run.
pub const MAX_PERFT_DEPTH: usize = 6;

/// A session setting changed with `set <name> on|off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Draw the board with Unicode chess glyphs instead of FEN letters.
    Unicode(bool),
    /// Print the board after every committed move.
    Autoboard(bool),
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- reset to the starting position.
    New,
    /// `fen` -- print the current position.
    ShowFen,
    /// `fen <fields>` -- replace the current position.
    LoadFen(Game),
    /// `moves <square>` -- list destinations for the piece there.
    Moves(Square),
    /// `move <from> <to> [q|r|n|b]` -- commit a move.
    Move {
        from: Square,
        to: Square,
        /// `None` when the letter is absent or not one of the four pieces.
        promotion: Option<PromotionPiece>,
    },
    /// `board` -- draw the board.
    Board,
    /// `turn` -- name the side to move.
    Turn,
    /// `set <name> on|off` -- change a session option.
    Set(SessionOption),
    /// `perft <depth>` -- count leaf positions.
    Perft(usize),
    /// `quit` -- end the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, TextError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&word, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match word {
        "new" => Ok(Command::New),
        "fen" if args.is_empty() => Ok(Command::ShowFen),
        "fen" => Ok(Command::LoadFen(args.join(" ").parse()?)),
        "moves" => {
            let square = required(args, 0, "moves", "square")?;
            Ok(Command::Moves(parse_square(square)?))
        }
        "move" => parse_move(args),
        "board" => Ok(Command::Board),
        "turn" => Ok(Command::Turn),
        "set" => parse_set(args),
        "perft" => {
            let value = required(args, 0, "perft", "depth")?;
            let depth = value
                .parse()
                .ok()
                .filter(|&depth| depth <= MAX_PERFT_DEPTH)
                .ok_or_else(|| TextError::InvalidDepth {
                    value: value.to_string(),
                })?;
            Ok(Command::Perft(depth))
        }
        "quit" => Ok(Command::Quit),
        _ => Err(TextError::UnknownCommand {
            command: word.to_string(),
        }),
    }
}

/// Parse the `move` command arguments: `<from> <to> [promotion]`.
fn parse_move(args: &[&str]) -> Result<Command, TextError> {
    let from = parse_square(required(args, 0, "move", "source square")?)?;
    let to = parse_square(required(args, 1, "move", "destination square")?)?;
    let promotion = args.get(2).and_then(|letter| PromotionPiece::from_answer(letter));
    Ok(Command::Move {
        from,
        to,
        promotion,
    })
}

/// Parse the `set` command arguments: `<name> on|off`.
fn parse_set(args: &[&str]) -> Result<Command, TextError> {
    let name = required(args, 0, "set", "option name")?;
    let value = required(args, 1, "set", "value")?;
    let enabled = match value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(TextError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };
    let option = match name {
        "unicode" => SessionOption::Unicode(enabled),
        "autoboard" => SessionOption::Autoboard(enabled),
        _ => {
            return Err(TextError::InvalidOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

fn required<'a>(
    args: &[&'a str],
    index: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, TextError> {
    args.get(index)
        .copied()
        .ok_or(TextError::MissingArgument { command, argument })
}

fn parse_square(s: &str) -> Result<Square, TextError> {
    Square::from_algebraic(s).ok_or_else(|| TextError::InvalidSquare {
        found: s.to_string(),
    })
}
