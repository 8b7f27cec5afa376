//! Parallel root fan-out over candidate placements.
//!
//! Every top-level candidate already searches an independent board snapshot,
//! so the subtrees share no mutable state and can be scored on worker
//! threads. The reduction prefers the higher score and, on ties, the lower
//! enumeration index - the same earliest-row-major winner the sequential
//! loop produces.

use cascade_core::{Board, Coord, Placement, Player};
use cascade_engine::{apply_move, valid_moves};
use rayon::prelude::*;

use crate::alphabeta::{minimax, search_depth, MinimaxSearch, SearchError, LOSS_SCORE, WIN_SCORE};

impl MinimaxSearch {
    /// Parallel variant of [`MinimaxSearch::best_move`]. Returns exactly the
    /// same move for every board.
    pub fn best_move_parallel(&self, board: &Board) -> Result<Coord, SearchError> {
        let candidates = valid_moves(board, Player::Ai);
        if candidates.is_empty() {
            return Err(SearchError::NoValidMoves);
        }

        let heuristic = self.heuristic;
        let best = candidates
            .par_iter()
            .enumerate()
            .map(|(index, &mv)| {
                let next = apply_move(board, Placement::new(mv, Player::Ai));
                let depth = search_depth(&next);
                let score = minimax(&next, depth - 1, false, LOSS_SCORE, WIN_SCORE, heuristic);
                (score, index)
            })
            .reduce_with(|left, right| {
                if right.0 > left.0 || (right.0 == left.0 && right.1 < left.1) {
                    right
                } else {
                    left
                }
            });

        // candidates is non-empty, so the reduction always yields a winner
        let (_, index) = best.ok_or(SearchError::NoValidMoves)?;
        Ok(candidates[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, at: Coord, count: u32, owner: Player) {
        let cell = board.get_mut(at);
        cell.count = count;
        cell.owner = Some(owner);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut board = Board::new(3, 3);
        place(&mut board, Coord::new(0, 0), 1, Player::Ai);
        place(&mut board, Coord::new(1, 1), 2, Player::Human);
        place(&mut board, Coord::new(2, 2), 1, Player::Ai);

        let search = MinimaxSearch::default();
        assert_eq!(search.best_move(&board), search.best_move_parallel(&board));
    }

    #[test]
    fn test_parallel_tie_break_is_row_major() {
        let board = Board::new(3, 3);
        let search = MinimaxSearch::default();
        assert_eq!(search.best_move_parallel(&board), Ok(Coord::new(0, 0)));
    }

    #[test]
    fn test_parallel_no_valid_moves() {
        let mut board = Board::new(2, 2);
        for at in board.coords().collect::<Vec<_>>() {
            place(&mut board, at, 1, Player::Human);
        }
        let search = MinimaxSearch::default();
        assert_eq!(
            search.best_move_parallel(&board),
            Err(SearchError::NoValidMoves)
        );
    }
}
