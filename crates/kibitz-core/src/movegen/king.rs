//! King step and castling generation.

use crate::board::Board;
use crate::castling::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::state::GameState;

use super::gen_steps;

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate king destinations (single steps + castling hops).
///
/// Castling only looks at the moved flags and the squares between king and
/// rook. Attacked squares, including the king's own, do not matter.
pub(super) fn gen_king(board: &Board, state: &GameState, from: Square, king: Piece) -> SquareSet {
    let mut set = gen_steps(board, from, king, &KING_DELTAS);

    let color = king.color();
    if state.king_moved(color) || from != CastleSide::king_home(color) {
        return set;
    }

    let own_rook = Piece::new(PieceKind::Rook, color);
    for side in CastleSide::ALL {
        if !state.may_castle(color, side) || board.piece_at(side.rook_corner(color)) != Some(own_rook) {
            continue;
        }
        let path_clear = side.between_cols().iter().all(|&col| {
            Square::from_row_col(from.row(), col).is_some_and(|sq| board.is_empty(sq))
        });
        if path_clear {
            set.insert(side.king_target(color));
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use crate::game::Game;
    use crate::square::Square;

    fn game(fen: &str) -> Game {
        fen.parse().unwrap()
    }

    #[test]
    fn king_steps_in_centre() {
        let game = game("4k3/8/8/8/3K4/8/8/8 w - - 0 1");
        assert_eq!(game.legal_destinations(Square::D4).unwrap().len(), 8);
    }

    #[test]
    fn king_on_edge_does_not_wrap() {
        let game = game("4k3/8/8/8/7K/8/8/8 w - - 0 1");
        let dests = game.legal_destinations(Square::H4).unwrap();
        assert_eq!(dests.len(), 5);
        assert!(!dests.contains(Square::A3));
        assert!(!dests.contains(Square::A4));
    }

    #[test]
    fn both_castles_offered() {
        let game = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let dests = game.legal_destinations(Square::E1).unwrap();
        assert!(dests.contains(Square::G1));
        assert!(dests.contains(Square::C1));
        assert_eq!(dests.len(), 7);
    }

    #[test]
    fn black_castles_offered() {
        let game = game("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        let dests = game.legal_destinations(Square::E8).unwrap();
        assert!(dests.contains(Square::G8));
        assert!(dests.contains(Square::C8));
    }

    #[test]
    fn castling_blocked_by_any_piece_between() {
        // Knight on b1 blocks queenside even though the king never crosses b1.
        let game = game("4k3/8/8/8/8/8/8/RN2K1nR w KQ - 0 1");
        let dests = game.legal_destinations(Square::E1).unwrap();
        assert!(!dests.contains(Square::C1));
        assert!(!dests.contains(Square::G1));
    }

    #[test]
    fn castling_needs_rights() {
        let game = game("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1");
        let dests = game.legal_destinations(Square::E1).unwrap();
        assert!(dests.contains(Square::C1));
        assert!(!dests.contains(Square::G1));
    }

    #[test]
    fn castling_ignores_check_and_attacked_squares() {
        // Black rooks attack e1 and f1; castling is still offered.
        let blocked = game("4kr2/8/8/8/8/8/8/4Kr1R w K - 0 1");
        let dests = blocked.legal_destinations(Square::E1).unwrap();
        assert!(!dests.contains(Square::G1), "f1 is occupied");

        let in_check = game("4rr1k/8/8/8/8/8/8/4K2R w K - 0 1");
        let dests = in_check.legal_destinations(Square::E1).unwrap();
        assert!(dests.contains(Square::G1));
    }

    #[test]
    fn castling_needs_rook_on_corner() {
        let game = game("4k3/8/8/8/8/8/8/4K3 w K - 0 1");
        let dests = game.legal_destinations(Square::E1).unwrap();
        assert!(!dests.contains(Square::G1));
    }
}
