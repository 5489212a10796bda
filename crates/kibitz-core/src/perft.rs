//! Perft (performance test) over generated destinations.
//!
//! Counts follow the same rules as [`legal_destinations`](crate::legal_destinations):
//! moves that leave the mover's king in check are included, and a promotion
//! counts once (as a queen).

use crate::board::Board;
use crate::commit::apply;
use crate::game::Game;
use crate::movegen::destinations_for;
use crate::promotion::PromotionPiece;
use crate::state::GameState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// destinations summed over every piece of the side to move.
pub fn perft(game: &Game, depth: usize) -> u64 {
    perft_inner(game.board(), game.state(), depth)
}

fn perft_inner(board: &Board, state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for from in board.occupied_by(state.turn()) {
        let Some(mover) = board.piece_at(from) else {
            continue;
        };
        let dests = destinations_for(board, state, from, mover);
        if depth == 1 {
            nodes += dests.len() as u64;
            continue;
        }
        for to in dests {
            let (child_board, child_state) =
                apply(board, state, from, to, mover, &mut PromotionPiece::Queen);
            nodes += perft_inner(&child_board, &child_state, depth - 1);
        }
    }
    nodes
}

/// Run perft with a per-move breakdown.
///
/// Returns `(move, node_count)` pairs such as `("e2e4", 20)`, sorted by move.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let (board, state) = (game.board(), game.state());
    let mut results = Vec::new();
    for from in board.occupied_by(state.turn()) {
        let Some(mover) = board.piece_at(from) else {
            continue;
        };
        for to in destinations_for(board, state, from, mover) {
            let (child_board, child_state) =
                apply(board, state, from, to, mover, &mut PromotionPiece::Queen);
            let count = if depth <= 1 {
                1
            } else {
                perft_inner(&child_board, &child_state, depth - 1)
            };
            results.push((format!("{from}{to}"), count));
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(fen: &str) -> Game {
        fen.parse().unwrap()
    }

    #[test]
    fn perft_depth_0_is_one() {
        assert_eq!(perft(&Game::new(), 0), 1);
    }

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Game::new(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Game::new(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Game::new(), 3), 8902);
    }

    #[test]
    fn divide_sums_to_perft() {
        let start = Game::new();
        let results = divide(&start, 2);
        assert_eq!(results.len(), 20);
        assert_eq!(results.iter().map(|(_, n)| n).sum::<u64>(), perft(&start, 2));
        assert!(results.contains(&("e2e4".to_string(), 20)));
        assert!(results.contains(&("g1f3".to_string(), 20)));
    }

    #[test]
    fn divide_is_sorted() {
        let results = divide(&Game::new(), 1);
        let names: Vec<&str> = results.iter().map(|(m, _)| m.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names[0], "a2a3");
    }

    #[test]
    fn pinned_piece_moves_are_counted() {
        // The e2 rook is pinned against e1 but still offers all its squares.
        let pinned = game("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let rook_moves = divide(&pinned, 1)
            .into_iter()
            .filter(|(m, _)| m.starts_with("e2"))
            .count();
        // Along the file: e3..e8 (6); along the rank: a2..d2, f2..h2 (7).
        assert_eq!(rook_moves, 13);
    }
}
