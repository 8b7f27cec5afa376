//! Cascade eval crate - static heuristics for board evaluation.
//!
//! Every heuristic has the signature `fn(&Board) -> i32` and is signed
//! positive in favor of the automated player.

use cascade_core::{Board, CellKind, Player};

/// Selectable evaluation function for search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Heuristic {
    /// Orb counts weighted by same/opposite-color adjacency. The default.
    #[default]
    AdjacencyAdvantage,
    /// Raw orb-count difference.
    OrbDifference,
    /// Occupied cells weighted by structural type.
    PositionalByCells,
    /// Orb counts weighted by structural type.
    PositionalByOrbs,
    /// Difference in cells sitting one orb below critical mass.
    CriticalCellDifference,
}

impl Heuristic {
    pub fn score(self, board: &Board) -> i32 {
        match self {
            Heuristic::AdjacencyAdvantage => adjacency_advantage(board),
            Heuristic::OrbDifference => orb_difference(board),
            Heuristic::PositionalByCells => positional_by_cells(board),
            Heuristic::PositionalByOrbs => positional_by_orbs(board),
            Heuristic::CriticalCellDifference => critical_cell_difference(board),
        }
    }
}

/// Adjacency advantage, the wired-in default.
///
/// Each occupied cell contributes its orb count plus a bonus per orthogonal
/// neighbor: own-color neighbors of an AI cell are worth 2 when the cell is
/// one orb from exploding, else 1; opposing neighbors count against. The
/// mirrored rule applies to human-owned cells with the advantage and
/// disadvantage accumulators swapped.
pub fn adjacency_advantage(board: &Board) -> i32 {
    let mut advantage = 0i32;
    for at in board.coords() {
        let cell = board.get(at);
        if cell.is_empty() {
            continue;
        }
        let about_to_explode = cell.count == cell.critical_mass() - 1;
        let near_bonus = if about_to_explode { 2 } else { 1 };

        let mut cell_advantage = 0i32;
        let mut cell_disadvantage = 0i32;
        match cell.owner {
            Some(Player::Ai) => {
                cell_advantage += cell.count as i32;
                for neighbor in board.neighbors(at) {
                    match board.get(neighbor).owner {
                        Some(Player::Ai) => cell_advantage += near_bonus,
                        Some(Player::Human) => cell_disadvantage += 1,
                        None => {}
                    }
                }
            }
            Some(Player::Human) => {
                cell_disadvantage += cell.count as i32;
                for neighbor in board.neighbors(at) {
                    match board.get(neighbor).owner {
                        Some(Player::Ai) => cell_disadvantage += near_bonus,
                        Some(Player::Human) => cell_advantage += 1,
                        None => {}
                    }
                }
            }
            None => {}
        }
        advantage += cell_advantage - cell_disadvantage;
    }
    advantage
}

/// AI orbs minus human orbs.
pub fn orb_difference(board: &Board) -> i32 {
    board.orb_count(Player::Ai) as i32 - board.orb_count(Player::Human) as i32
}

fn structural_weight(kind: CellKind) -> i32 {
    match kind {
        CellKind::Corner | CellKind::Edge => 2,
        CellKind::Normal => 1,
    }
}

/// Occupied-cell count weighted by structural type (corner/edge worth 2).
pub fn positional_by_cells(board: &Board) -> i32 {
    let mut advantage = 0i32;
    for at in board.coords() {
        let cell = board.get(at);
        let weight = structural_weight(cell.kind);
        match cell.owner {
            Some(Player::Ai) => advantage += weight,
            Some(Player::Human) => advantage -= weight,
            None => {}
        }
    }
    advantage
}

/// Orb count weighted by structural type.
pub fn positional_by_orbs(board: &Board) -> i32 {
    let mut advantage = 0i32;
    for at in board.coords() {
        let cell = board.get(at);
        if cell.is_empty() {
            continue;
        }
        let weighted = cell.count as i32 * structural_weight(cell.kind);
        match cell.owner {
            Some(Player::Ai) => advantage += weighted,
            Some(Player::Human) => advantage -= weighted,
            None => {}
        }
    }
    advantage
}

/// Cells exactly one orb below critical mass, AI minus human.
pub fn critical_cell_difference(board: &Board) -> i32 {
    let mut ai_critical = 0i32;
    let mut human_critical = 0i32;
    for at in board.coords() {
        let cell = board.get(at);
        if cell.count == cell.critical_mass() - 1 {
            match cell.owner {
                Some(Player::Ai) => ai_critical += 1,
                Some(Player::Human) => human_critical += 1,
                None => {}
            }
        }
    }
    ai_critical - human_critical
}
