//! Legal placement enumeration.

use cascade_core::{Board, Coord, Player};

/// A cell is a legal target when it is empty or already holds the mover's
/// own orbs.
pub fn is_valid_move(board: &Board, at: Coord, player: Player) -> bool {
    let cell = board.get(at);
    cell.is_empty() || cell.owner == Some(player)
}

/// All legal placements for `player`, in row-major scan order.
///
/// The order is load-bearing: it is the deterministic tie-break for both the
/// first-move fallback and for which of several equally-scored moves search
/// returns.
pub fn valid_moves(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&at| is_valid_move(board, at, player))
        .collect()
}
