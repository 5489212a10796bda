//! Sliding piece (bishop, rook, queen) destinations by ray casting.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Ray directions as `(row, column)` steps: four orthogonal, then four diagonal.
const RAYS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The rays a piece of `kind` slides along. Stepping pieces have none.
pub(super) fn rays(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Rook => &RAYS[..4],
        PieceKind::Bishop => &RAYS[4..],
        PieceKind::Queen => &RAYS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

/// Walk each ray from `from` until it leaves the board or meets a piece.
///
/// Empty squares are added and the walk continues. An enemy piece is added
/// and ends the ray; a friendly piece ends it without being added.
pub(super) fn gen_slider(board: &Board, from: Square, mover: Piece, directions: &[(i8, i8)]) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => set.insert(next),
                Some(target) => {
                    if mover.is_enemy_of(target) {
                        set.insert(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    set
}
