//! Core chess rules: board representation, destination generation and move commit.

mod board;
mod castling;
mod color;
mod commit;
mod error;
mod fen;
mod game;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod promotion;
mod square;
mod square_set;
mod state;

pub use board::{Board, PrettyBoard};
pub use castling::{CastleSide, MovedFlags};
pub use color::Color;
pub use commit::commit;
pub use error::{BoardError, FenError, RulesError};
pub use fen::{STARTING_FEN, parse as parse_fen, to_fen};
pub use game::Game;
pub use movegen::legal_destinations;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use promotion::{ChooseWith, NoChoice, PromotionChooser, PromotionPiece};
pub use square::Square;
pub use square_set::SquareSet;
pub use state::GameState;

/// The standard starting layout together with a fresh state (White to move, nothing moved).
pub fn initial_board() -> (Board, GameState) {
    (Board::starting_position(), GameState::new())
}

/// The side to move in `state`.
pub fn current_turn(state: &GameState) -> Color {
    state.turn()
}
