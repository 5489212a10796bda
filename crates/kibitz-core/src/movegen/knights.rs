//! Knight destinations.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::gen_steps;

/// The eight L-shaped jumps as `(row, column)` deltas.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate knight destinations.
pub(super) fn gen_knight(board: &Board, from: Square, knight: Piece) -> SquareSet {
    gen_steps(board, from, knight, &KNIGHT_DELTAS)
}
