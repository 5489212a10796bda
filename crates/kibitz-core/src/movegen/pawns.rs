//! Pawn destinations: pushes, diagonal captures and en passant.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::state::GameState;

/// Generate pawn destinations.
///
/// Promotion is not decided here: a push or capture onto the far row is an
/// ordinary destination and the piece is swapped when the move is committed.
pub(super) fn gen_pawn(board: &Board, state: &GameState, from: Square, pawn: Piece) -> SquareSet {
    let color = pawn.color();
    let forward = color.forward();
    let mut set = SquareSet::EMPTY;

    // --- Pushes ---
    if let Some(one) = from.offset(forward, 0)
        && board.is_empty(one)
    {
        set.insert(one);
        if from.row() == color.pawn_row()
            && let Some(two) = one.offset(forward, 0)
            && board.is_empty(two)
        {
            set.insert(two);
        }
    }

    // --- Captures, en passant included ---
    for dc in [-1, 1] {
        let Some(diag) = from.offset(forward, dc) else {
            continue;
        };
        match board.piece_at(diag) {
            Some(target) if pawn.is_enemy_of(target) => set.insert(diag),
            None if state.en_passant() == Some(diag) => set.insert(diag),
            _ => {}
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use crate::game::Game;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn dests(fen: &str, from: Square) -> SquareSet {
        let game: Game = fen.parse().unwrap();
        game.legal_destinations(from).unwrap()
    }

    fn squares(list: &[Square]) -> SquareSet {
        list.iter().copied().collect()
    }

    #[test]
    fn white_home_row_double_step() {
        let set = dests("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", Square::E2);
        assert_eq!(set, squares(&[Square::E3, Square::E4]));
    }

    #[test]
    fn black_home_row_double_step() {
        let set = dests("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", Square::D7);
        assert_eq!(set, squares(&[Square::D6, Square::D5]));
    }

    #[test]
    fn no_double_step_off_home_row() {
        let set = dests("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1", Square::E3);
        assert_eq!(set, squares(&[Square::E4]));
    }

    #[test]
    fn double_step_blocked_on_far_square() {
        let set = dests("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", Square::E2);
        assert_eq!(set, squares(&[Square::E3]));
    }

    #[test]
    fn double_step_blocked_on_near_square() {
        let set = dests("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", Square::E2);
        assert!(set.is_empty());
    }

    #[test]
    fn captures_only_enemies() {
        // d3 holds a black knight, f3 a white knight.
        let set = dests("4k3/8/8/8/8/3n1N2/4P3/4K3 w - - 0 1", Square::E2);
        assert_eq!(set, squares(&[Square::E3, Square::E4, Square::D3]));
    }

    #[test]
    fn edge_file_has_one_diagonal() {
        // a-pawn next to black pieces on b5 and h6; h6 must not be reachable by wrapping.
        let set = dests("4k3/8/7n/1n6/P7/8/8/4K3 w - - 0 1", Square::A4);
        assert_eq!(set, squares(&[Square::A5, Square::B5]));

        // a4 is where h4 + one row + one column lands in raw index arithmetic.
        let set = dests("4k3/8/8/8/n6P/8/8/4K3 w - - 0 1", Square::H4);
        assert_eq!(set, squares(&[Square::H5]));
    }

    #[test]
    fn en_passant_target_offered() {
        let set = dests("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1", Square::D5);
        assert_eq!(set, squares(&[Square::D6, Square::E6]));
    }

    #[test]
    fn en_passant_needs_adjacent_file() {
        let set = dests("4k3/8/8/2P1p3/8/8/8/4K3 w - e6 0 1", Square::C5);
        assert_eq!(set, squares(&[Square::C6]));
    }

    #[test]
    fn push_onto_far_row_is_a_destination() {
        let set = dests("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", Square::A7);
        assert_eq!(set, squares(&[Square::A8, Square::B8]));
    }
}
