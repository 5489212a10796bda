//! A game in progress: the board and state owned together.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::commit::commit;
use crate::error::{FenError, RulesError};
use crate::fen;
use crate::movegen::legal_destinations;
use crate::promotion::PromotionChooser;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::state::GameState;

/// Owns the [`Board`] and [`GameState`] for one game and advances them one move at a time.
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// A new game from the standard starting layout.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            state: GameState::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The side to move.
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.state.turn()
    }

    /// Destinations for the piece on `from`; see [`legal_destinations`].
    pub fn legal_destinations(&self, from: Square) -> Result<SquareSet, RulesError> {
        legal_destinations(&self.board, &self.state, from)
    }

    /// Commit `from -> to`. On error the game is left untouched.
    pub fn commit<C: PromotionChooser + ?Sized>(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut C,
    ) -> Result<(), RulesError> {
        let (board, state) = commit(&self.board, &self.state, from, to, chooser)?;
        self.board = board;
        self.state = state;
        Ok(())
    }

    /// Serialize the position to FEN.
    pub fn to_fen(&self) -> String {
        fen::to_fen(&self.board, &self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Game, FenError> {
        let (board, state) = fen::parse(s)?;
        Ok(Game { board, state })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game(\"{}\")", self.to_fen())
    }
}
