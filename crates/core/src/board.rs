//! Board representation - row-major cell grid with structural classification.

use crate::{Cell, CellKind, Coord, Player};
use serde::{Deserialize, Serialize};

/// Rectangular Chain Reaction board.
///
/// Cells are stored row-major. Every cell's [`CellKind`] is derived from its
/// position at construction time and is never taken from external input.
///
/// `Clone` is a true deep copy: the grid is a plain owned `Vec<Cell>` with no
/// shared backing storage, so a cloned snapshot can be mutated freely without
/// affecting its source. Search relies on this for branch independence.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `rows` x `cols` board with every cell classified.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::empty(classify(row, col, rows, cols)));
            }
        }
        Self { rows, cols, cells }
    }

    /// Build a board from row-major `(count, owner)` pairs. Cell kinds are
    /// re-derived from position regardless of what the caller computed.
    pub fn from_rows(rows_of_cells: Vec<Vec<(u32, Option<Player>)>>) -> Self {
        let rows = rows_of_cells.len();
        let cols = rows_of_cells.first().map_or(0, |r| r.len());
        let mut board = Self::new(rows, cols);
        for (r, row) in rows_of_cells.into_iter().enumerate() {
            for (c, (count, owner)) in row.into_iter().enumerate() {
                let cell = board.get_mut(Coord::new(r, c));
                cell.count = count;
                cell.owner = owner;
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    pub fn get(&self, at: Coord) -> &Cell {
        &self.cells[at.row * self.cols + at.col]
    }

    pub fn get_mut(&mut self, at: Coord) -> &mut Cell {
        &mut self.cells[at.row * self.cols + at.col]
    }

    /// Orb count at which the cell at `at` explodes.
    pub fn critical_mass(&self, at: Coord) -> u32 {
        self.get(at).critical_mass()
    }

    /// In-bounds orthogonal neighbors, in up/down/left/right order.
    pub fn neighbors(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        ORTHOGONAL.iter().filter_map(move |&(dr, dc)| {
            let row = at.row as isize + dr;
            let col = at.col as isize + dc;
            self.in_bounds(row, col)
                .then(|| Coord::new(row as usize, col as usize))
        })
    }

    /// Row-major iteration over coordinates. The enumeration order here is
    /// the deterministic tie-break order used throughout move selection.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Total orbs owned by `player`.
    pub fn orb_count(&self, player: Player) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.owner == Some(player))
            .map(|cell| cell.count)
            .sum()
    }

    /// Total orbs on the board, both players combined.
    pub fn total_orbs(&self) -> u32 {
        self.orb_count(Player::Human) + self.orb_count(Player::Ai)
    }

    /// True iff at most one player currently owns any cells. Note that an
    /// entirely empty board is terminal by this definition.
    pub fn is_terminal(&self) -> bool {
        let mut human_has_orbs = false;
        let mut ai_has_orbs = false;
        for cell in &self.cells {
            match cell.owner {
                Some(Player::Human) => human_has_orbs = true,
                Some(Player::Ai) => ai_has_orbs = true,
                None => {}
            }
            if human_has_orbs && ai_has_orbs {
                return false;
            }
        }
        true
    }

    /// True iff `player`'s opponent owns zero cells. This is the authoritative
    /// win check used by search; it is deliberately independent of
    /// [`Board::is_terminal`].
    pub fn is_winning_for(&self, player: Player) -> bool {
        let opponent = player.opponent();
        self.cells.iter().all(|cell| cell.owner != Some(opponent))
    }
}

/// Classify a position: corner when on an extreme row *and* an extreme
/// column, edge when on any boundary row or column, normal otherwise.
fn classify(row: usize, col: usize, rows: usize, cols: usize) -> CellKind {
    let extreme_row = row == 0 || row == rows - 1;
    let extreme_col = col == 0 || col == cols - 1;
    if extreme_row && extreme_col {
        CellKind::Corner
    } else if extreme_row || extreme_col {
        CellKind::Edge
    } else {
        CellKind::Normal
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.get(Coord::new(row, col));
                let color = cell.owner.map_or(' ', Player::color);
                write!(f, "[{},{}] ", cell.count, color)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_9x6() {
        let b = Board::new(9, 6);
        assert_eq!(b.get(Coord::new(0, 0)).kind, CellKind::Corner);
        assert_eq!(b.get(Coord::new(0, 5)).kind, CellKind::Corner);
        assert_eq!(b.get(Coord::new(8, 0)).kind, CellKind::Corner);
        assert_eq!(b.get(Coord::new(8, 5)).kind, CellKind::Corner);
        assert_eq!(b.get(Coord::new(0, 3)).kind, CellKind::Edge);
        assert_eq!(b.get(Coord::new(4, 0)).kind, CellKind::Edge);
        assert_eq!(b.get(Coord::new(4, 3)).kind, CellKind::Normal);
    }

    #[test]
    fn test_critical_mass_partition_any_dims() {
        for (rows, cols) in [(2, 2), (3, 3), (9, 6), (2, 7)] {
            let b = Board::new(rows, cols);
            let mut corners = 0;
            for at in b.coords() {
                let on_boundary =
                    at.row == 0 || at.row == rows - 1 || at.col == 0 || at.col == cols - 1;
                match b.critical_mass(at) {
                    2 => corners += 1,
                    3 => assert!(on_boundary),
                    4 => assert!(!on_boundary),
                    other => panic!("unexpected critical mass {other}"),
                }
            }
            assert_eq!(corners, 4);
        }
    }

    #[test]
    fn test_neighbors_corner_and_interior() {
        let b = Board::new(3, 3);
        let corner: Vec<_> = b.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        let center: Vec<_> = b.neighbors(Coord::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_coords_row_major() {
        let b = Board::new(2, 3);
        let order: Vec<_> = b.coords().collect();
        assert_eq!(order[0], Coord::new(0, 0));
        assert_eq!(order[1], Coord::new(0, 1));
        assert_eq!(order[2], Coord::new(0, 2));
        assert_eq!(order[3], Coord::new(1, 0));
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn test_orb_count_and_terminal() {
        let mut b = Board::new(3, 3);
        assert!(b.is_terminal());

        let cell = b.get_mut(Coord::new(0, 0));
        cell.count = 2;
        cell.owner = Some(Player::Ai);
        assert!(b.is_terminal());
        assert!(b.is_winning_for(Player::Ai));
        assert!(!b.is_winning_for(Player::Human));
        assert_eq!(b.orb_count(Player::Ai), 2);
        assert_eq!(b.orb_count(Player::Human), 0);

        let cell = b.get_mut(Coord::new(2, 2));
        cell.count = 1;
        cell.owner = Some(Player::Human);
        assert!(!b.is_terminal());
        assert!(!b.is_winning_for(Player::Ai));
        assert_eq!(b.total_orbs(), 3);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Board::new(3, 3);
        let snapshot = original.clone();

        let cell = original.get_mut(Coord::new(1, 1));
        cell.count = 3;
        cell.owner = Some(Player::Human);

        assert!(snapshot.get(Coord::new(1, 1)).is_empty());
        assert_eq!(snapshot.orb_count(Player::Human), 0);
    }

    #[test]
    fn test_from_rows_reclassifies() {
        let b = Board::from_rows(vec![
            vec![(1, Some(Player::Ai)), (0, None)],
            vec![(0, None), (2, Some(Player::Human))],
        ]);
        assert_eq!(b.rows(), 2);
        assert_eq!(b.cols(), 2);
        // every cell of a 2x2 board is a corner
        for at in b.coords() {
            assert_eq!(b.critical_mass(at), 2);
        }
        assert_eq!(b.get(Coord::new(0, 0)).owner, Some(Player::Ai));
        assert_eq!(b.get(Coord::new(1, 1)).count, 2);
    }

    #[test]
    fn test_display_format() {
        let mut b = Board::new(2, 2);
        let cell = b.get_mut(Coord::new(0, 0));
        cell.count = 1;
        cell.owner = Some(Player::Ai);
        let rendered = b.to_string();
        assert!(rendered.starts_with("[1,B] [0, ] "));
    }
}
