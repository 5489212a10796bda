//! Destination generation for a single selected piece.
//!
//! Generation follows piece movement rules only: it never checks whether the
//! mover's own king is left in check.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::error::RulesError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::state::GameState;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_slider, rays};

/// Return every square the piece on `from` may move to.
///
/// # Errors
///
/// [`RulesError::EmptySource`] if `from` is empty and
/// [`RulesError::NotYourPiece`] if the piece there is not the side to move's.
pub fn legal_destinations(
    board: &Board,
    state: &GameState,
    from: Square,
) -> Result<SquareSet, RulesError> {
    let mover = source_piece(board, state, from)?;
    Ok(destinations_for(board, state, from, mover))
}

/// Look up the piece on `from` and check that it belongs to the side to move.
pub(crate) fn source_piece(
    board: &Board,
    state: &GameState,
    from: Square,
) -> Result<Piece, RulesError> {
    let piece = board
        .piece_at(from)
        .ok_or(RulesError::EmptySource { square: from })?;
    if piece.color() != state.turn() {
        return Err(RulesError::not_your_piece(from, piece.color(), state.turn()));
    }
    Ok(piece)
}

/// Dispatch on the piece kind. `mover` must be the piece standing on `from`.
pub(crate) fn destinations_for(
    board: &Board,
    state: &GameState,
    from: Square,
    mover: Piece,
) -> SquareSet {
    match mover.kind() {
        PieceKind::Pawn => gen_pawn(board, state, from, mover),
        PieceKind::Knight => gen_knight(board, from, mover),
        kind @ (PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            gen_slider(board, from, mover, rays(kind))
        }
        PieceKind::King => gen_king(board, state, from, mover),
    }
}

/// Apply each `(row, column)` delta once, keeping squares that are empty or hold an enemy.
fn gen_steps(board: &Board, from: Square, mover: Piece, deltas: &[(i8, i8)]) -> SquareSet {
    deltas
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.piece_at(to).is_none_or(|target| mover.is_enemy_of(target)))
        .collect()
}
