//! Coordinates and placements.

use crate::Player;
use serde::{Deserialize, Serialize};

/// 0-indexed grid coordinate, `(row, col)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single orb placement by one player. Ephemeral — never persisted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub coord: Coord,
    pub player: Player,
}

impl Placement {
    pub fn new(coord: Coord, player: Player) -> Self {
        Self { coord, player }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_new() {
        let c = Coord::new(3, 5);
        assert_eq!(c.row, 3);
        assert_eq!(c.col, 5);
    }

    #[test]
    fn test_placement_new() {
        let p = Placement::new(Coord::new(0, 0), Player::Ai);
        assert_eq!(p.player, Player::Ai);
        assert_eq!(p.coord, Coord::new(0, 0));
    }
}
