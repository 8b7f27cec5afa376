//! Cell contents and structural classification.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Structural position of a cell on the grid. Derived once from the cell's
/// coordinates and the board dimensions; it never changes afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CellKind {
    Corner,
    Edge,
    Normal,
}

impl CellKind {
    /// Orb count at which a cell of this kind explodes.
    pub fn critical_mass(self) -> u32 {
        match self {
            CellKind::Corner => 2,
            CellKind::Edge => 3,
            CellKind::Normal => 4,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub count: u32,
    pub owner: Option<Player>,
    pub kind: CellKind,
}

impl Cell {
    pub fn empty(kind: CellKind) -> Self {
        Self {
            count: 0,
            owner: None,
            kind,
        }
    }

    pub fn critical_mass(&self) -> u32 {
        self.kind.critical_mass()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_mass_by_kind() {
        assert_eq!(CellKind::Corner.critical_mass(), 2);
        assert_eq!(CellKind::Edge.critical_mass(), 3);
        assert_eq!(CellKind::Normal.critical_mass(), 4);
    }

    #[test]
    fn test_empty_cell() {
        let c = Cell::empty(CellKind::Edge);
        assert!(c.is_empty());
        assert_eq!(c.owner, None);
        assert_eq!(c.critical_mass(), 3);
    }
}
