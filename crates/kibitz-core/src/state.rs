//! Game state carried between moves: turn, castling flags, en passant target.

use crate::castling::{CastleSide, MovedFlags};
use crate::color::Color;
use crate::square::Square;

/// Everything besides piece placement that decides which moves are available.
///
/// Only [`commit`](crate::commit) produces a new state during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    turn: Color,
    moved: MovedFlags,
    en_passant: Option<Square>,
}

impl GameState {
    /// State at the start of a game: White to move, nothing moved, no en passant target.
    pub const fn new() -> GameState {
        GameState {
            turn: Color::White,
            moved: MovedFlags::NONE,
            en_passant: None,
        }
    }

    /// Assemble a state from parts. Used when loading a position.
    pub const fn from_parts(turn: Color, moved: MovedFlags, en_passant: Option<Square>) -> GameState {
        GameState {
            turn,
            moved,
            en_passant,
        }
    }

    /// The side to move.
    #[inline]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub const fn moved(&self) -> MovedFlags {
        self.moved
    }

    /// Square skipped by the previous move's two-square pawn advance, if any.
    #[inline]
    pub const fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub const fn king_moved(&self, color: Color) -> bool {
        self.moved.king_moved(color)
    }

    #[inline]
    pub const fn rook_moved(&self, corner: Square) -> bool {
        self.moved.rook_moved(corner)
    }

    #[inline]
    pub const fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        self.moved.may_castle(color, side)
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self, color: Color) {
        self.moved = self.moved.with_king_moved(color);
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, corner: Square) {
        self.moved = self.moved.with_rook_moved(corner);
    }

    #[inline]
    pub(crate) fn switch_turn(&mut self) {
        self.turn = self.turn.flip();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::castling::CastleSide;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn new_game() {
        let state = GameState::new();
        assert_eq!(state.turn(), Color::White);
        assert_eq!(state.en_passant(), None);
        for color in Color::ALL {
            assert!(!state.king_moved(color));
            for side in CastleSide::ALL {
                assert!(state.may_castle(color, side));
            }
        }
    }

    #[test]
    fn switch_turn_alternates() {
        let mut state = GameState::new();
        state.switch_turn();
        assert_eq!(state.turn(), Color::Black);
        state.switch_turn();
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn marks_accumulate() {
        let mut state = GameState::new();
        state.mark_rook_moved(Square::A8);
        state.mark_king_moved(Color::White);
        assert!(state.rook_moved(Square::A8));
        assert!(state.king_moved(Color::White));
        assert!(!state.may_castle(Color::Black, CastleSide::QueenSide));
        assert!(state.may_castle(Color::Black, CastleSide::KingSide));
    }
}
