//! Move application and cascade resolution.

use crate::movegen::is_valid_move;
use cascade_core::{Board, Coord, Placement, Player};

/// Hard cap on cascade propagation waves. A chain still unstable after this
/// many waves is forcibly halted, leaving the board in its then-current
/// (possibly still over-critical) state.
///
/// The bound is fixed, not derived from board size; a large enough board can
/// hit it on a legitimate chain. Kept verbatim from the original rules.
pub const WAVE_CAP: u32 = 20;

/// Place one orb per `mv` and resolve any resulting cascade in place.
///
/// An illegal target (occupied by the opponent) is silently ignored. Callers
/// that stick to enumerated moves never hit this branch; it is a guard, not
/// an error path.
pub fn apply_move_mut(board: &mut Board, mv: Placement) {
    let Placement { coord: at, player } = mv;
    if !is_valid_move(board, at, player) {
        return;
    }

    let cell = board.get_mut(at);
    if cell.is_empty() {
        cell.owner = Some(player);
    }
    cell.count += 1;

    if board.get(at).count >= board.critical_mass(at) {
        resolve_cascade(board, at, player);
    }
}

/// Apply a move to a clone of `board` and return the resulting board.
pub fn apply_move(board: &Board, mv: Placement) -> Board {
    let mut next = board.clone();
    apply_move_mut(&mut next, mv);
    next
}

/// Bounded wave propagation from an over-critical cell.
///
/// The opponent's orb total is tracked incrementally while orbs are captured,
/// so elimination is detected without rescanning the board between waves:
/// once the tally drops to zero the position is terminal and the remaining
/// frontier is abandoned.
fn resolve_cascade(board: &mut Board, origin: Coord, player: Player) {
    let opponent = player.opponent();
    let mut opponent_orbs = board.orb_count(opponent) as i64;

    let mut frontier = vec![origin];
    let mut waves = 0u32;
    while !frontier.is_empty() {
        waves += 1;
        if waves > WAVE_CAP {
            break;
        }

        let mut next_frontier = Vec::new();
        for at in frontier {
            let cell = board.get_mut(at);
            cell.count = 0;
            cell.owner = None;

            let neighbors: Vec<Coord> = board.neighbors(at).collect();
            for neighbor in neighbors {
                let critical = board.critical_mass(neighbor);
                let cell = board.get_mut(neighbor);
                if cell.owner == Some(opponent) {
                    opponent_orbs -= i64::from(cell.count);
                }
                cell.count += 1;
                cell.owner = Some(player);
                if cell.count >= critical {
                    next_frontier.push(neighbor);
                }
            }
        }
        frontier = next_frontier;

        if opponent_orbs <= 0 {
            return; // opponent eliminated, position is terminal
        }
    }
}
