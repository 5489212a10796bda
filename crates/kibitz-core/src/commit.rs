//! Move execution via copy-make.

use tracing::{debug, trace};

use crate::board::Board;
use crate::castling::CastleSide;
use crate::error::RulesError;
use crate::movegen::{destinations_for, source_piece};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::promotion::{PromotionChooser, resolve};
use crate::square::Square;
use crate::state::GameState;

/// Commit the move `from -> to` and return the resulting board and state.
///
/// Copy-make: `board` and `state` are not modified. `chooser` is consulted
/// only when a pawn lands on its far row.
///
/// # Errors
///
/// Fails with an invalid-source error when `from` is empty or holds the
/// opponent's piece, and with [`RulesError::IllegalDestination`] when `to`
/// is not one of the generated destinations for `from`.
pub fn commit<C: PromotionChooser + ?Sized>(
    board: &Board,
    state: &GameState,
    from: Square,
    to: Square,
    chooser: &mut C,
) -> Result<(Board, GameState), RulesError> {
    let mover = source_piece(board, state, from)?;
    if !destinations_for(board, state, from, mover).contains(to) {
        return Err(RulesError::IllegalDestination { from, to });
    }
    Ok(apply(board, state, from, to, mover, chooser))
}

/// Apply a move already known to be among the generated destinations.
pub(crate) fn apply<C: PromotionChooser + ?Sized>(
    board: &Board,
    state: &GameState,
    from: Square,
    to: Square,
    mover: Piece,
    chooser: &mut C,
) -> (Board, GameState) {
    let mut b = *board;
    let mut s = *state;
    let us = mover.color();

    // En passant: the captured pawn stands beside `from`, in `to`'s column.
    if mover.kind() == PieceKind::Pawn
        && state.en_passant() == Some(to)
        && let Some(victim_sq) = Square::from_row_col(from.row(), to.col())
    {
        let victim = b.take(victim_sq);
        debug_assert_eq!(
            victim,
            Some(Piece::new(PieceKind::Pawn, us.flip())),
            "en passant target {to} without an enemy pawn on {victim_sq}"
        );
        trace!(%victim_sq, ?victim, "en passant capture");
    }

    // The target lives for exactly one reply.
    s.set_en_passant(None);
    if mover.kind() == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        s.set_en_passant(from.offset(us.forward(), 0));
    }

    // Castling carries the rook over the king.
    if mover.kind() == PieceKind::King
        && let Some(side) = CastleSide::from_king_move(from, to)
    {
        let corner = side.rook_corner(us);
        let rook_to = side.rook_target(us);
        let rook = b.take(corner);
        b.set(rook_to, rook);
        s.mark_rook_moved(corner);
        trace!(?side, %corner, %rook_to, "castling rook hop");
    }

    if let Some(captured) = b.take(to) {
        // A capture on a corner also ends castling toward it.
        s.mark_rook_moved(to);
        trace!(%to, ?captured, "capture");
    }

    b.set(from, None);
    b.set(to, Some(mover));

    match mover.kind() {
        PieceKind::King => s.mark_king_moved(us),
        PieceKind::Rook => s.mark_rook_moved(from),
        _ => {}
    }

    if mover.kind() == PieceKind::Pawn && to.row() == us.promotion_row() {
        let choice = resolve(chooser, us, to);
        b.set(to, Some(Piece::new(choice.to_piece_kind(), us)));
        debug!(%to, piece = %choice, "promotion");
    }

    s.switch_turn();
    debug!(%from, %to, piece = ?mover, en_passant = ?s.en_passant(), "committed move");
    (b, s)
}
