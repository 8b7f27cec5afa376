//! Minimax with alpha-beta pruning and dynamic depth selection.

use cascade_core::{Board, Coord, Placement, Player};
use cascade_engine::{apply_move, valid_moves};
use cascade_eval::Heuristic;
use thiserror::Error;

/// Score for a position where the automated player has eliminated the
/// opponent. Deliberately far below `i32::MAX`: the sentinel participates in
/// min/max folding against heuristic scores and must never sit at a native
/// integer extreme.
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Score for a position where the human has eliminated the automated player.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The automated player has no legal placement on the given board.
    #[error("no valid moves for the automated player")]
    NoValidMoves,
}

/// Search depth from the board's current total orb count: 3 plies while the
/// game is young, 2 once the branching cascades get expensive.
pub fn search_depth(board: &Board) -> u32 {
    if board.total_orbs() <= 20 {
        3
    } else {
        2
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Elimination is checked before the depth cutoff at every ply, so a forced
/// win or loss short-circuits even at depth 0. When the mover has no legal
/// placement the fold body never runs and the running extreme is returned
/// unchanged - no recursion, no evaluator call.
pub fn minimax(
    board: &Board,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    heuristic: Heuristic,
) -> i32 {
    if board.is_winning_for(Player::Ai) {
        return WIN_SCORE;
    }
    if board.is_winning_for(Player::Human) {
        return LOSS_SCORE;
    }
    if depth == 0 {
        return heuristic.score(board);
    }

    if maximizing {
        let mut max_eval = LOSS_SCORE;
        for mv in valid_moves(board, Player::Ai) {
            let next = apply_move(board, Placement::new(mv, Player::Ai));
            let eval = minimax(&next, depth - 1, false, alpha, beta, heuristic);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = WIN_SCORE;
        for mv in valid_moves(board, Player::Human) {
            let next = apply_move(board, Placement::new(mv, Player::Human));
            let eval = minimax(&next, depth - 1, true, alpha, beta, heuristic);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Top-level move selection for the automated player.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxSearch {
    pub heuristic: Heuristic,
}

impl MinimaxSearch {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    /// Pick the best placement for the automated player.
    ///
    /// Candidates are scored in row-major order with a strict-improvement
    /// update, so the earliest of equally-scored moves wins. The search depth
    /// is recomputed per candidate from the post-placement board; deeper
    /// plies only decrement it. When no candidate beats the initial sentinel
    /// the first enumerated move is returned.
    pub fn best_move(&self, board: &Board) -> Result<Coord, SearchError> {
        let candidates = valid_moves(board, Player::Ai);
        if candidates.is_empty() {
            return Err(SearchError::NoValidMoves);
        }

        let mut best_score = LOSS_SCORE;
        let mut best: Option<Coord> = None;
        for &mv in &candidates {
            let next = apply_move(board, Placement::new(mv, Player::Ai));
            let depth = search_depth(&next);
            let score = minimax(&next, depth - 1, false, LOSS_SCORE, WIN_SCORE, self.heuristic);
            if score > best_score {
                best_score = score;
                best = Some(mv);
            }
        }
        Ok(best.unwrap_or(candidates[0]))
    }
}
