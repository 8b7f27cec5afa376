//! cascade-search - adversarial move selection for the automated player.
//!
//! Depth-limited minimax with alpha-beta pruning over independent board
//! snapshots. The `rayon` feature (default) adds a parallel root fan-out
//! that returns exactly the same move as the sequential path.

mod alphabeta;
#[cfg(feature = "rayon")]
mod parallel;

pub use alphabeta::{minimax, search_depth, MinimaxSearch, SearchError, LOSS_SCORE, WIN_SCORE};
