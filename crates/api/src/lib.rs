//! cascade-api - wire descriptors and the request entry point.
//!
//! The transport layer (HTTP, JSON framing) lives outside this workspace;
//! this crate owns the descriptor types it exchanges and the stateless
//! board-in, move-out call. Cell structural types are always re-derived from
//! position - they are never trusted from input.

use cascade_core::{Board, Player};
use cascade_search::{MinimaxSearch, SearchError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One cell on the wire: an orb count and an optional color code
/// (`'R'` human, `'B'` AI, absent/null when empty).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CellDescriptor {
    pub count: u32,
    #[serde(default)]
    pub color: Option<char>,
}

/// Inbound board: a rectangular matrix of cell descriptors.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoardDescriptor {
    pub cells: Vec<Vec<CellDescriptor>>,
}

/// Outbound move: the chosen placement for the automated player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("board has no cells")]
    EmptyBoard,
    #[error("board must be at least 2x2, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown color {color:?} at ({row},{col})")]
    UnknownColor { row: usize, col: usize, color: char },
    #[error("cell ({row},{col}) has no orbs but carries a color")]
    ColoredEmptyCell { row: usize, col: usize },
    #[error("cell ({row},{col}) has orbs but no color")]
    MissingColor { row: usize, col: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Validate a wire board and build the internal representation.
pub fn board_from_descriptor(descriptor: &BoardDescriptor) -> Result<Board, DescriptorError> {
    let rows = descriptor.cells.len();
    if rows == 0 {
        return Err(DescriptorError::EmptyBoard);
    }
    let cols = descriptor.cells[0].len();
    if cols == 0 {
        return Err(DescriptorError::EmptyBoard);
    }
    if rows < 2 || cols < 2 {
        return Err(DescriptorError::TooSmall { rows, cols });
    }

    let mut grid = Vec::with_capacity(rows);
    for (row, wire_row) in descriptor.cells.iter().enumerate() {
        if wire_row.len() != cols {
            return Err(DescriptorError::RaggedRow {
                row,
                expected: cols,
                got: wire_row.len(),
            });
        }
        let mut cells = Vec::with_capacity(cols);
        for (col, cell) in wire_row.iter().enumerate() {
            let owner = match cell.color {
                None => None,
                Some(color) => match Player::from_color(color) {
                    Some(player) => Some(player),
                    None => return Err(DescriptorError::UnknownColor { row, col, color }),
                },
            };
            match (cell.count, owner) {
                (0, Some(_)) => return Err(DescriptorError::ColoredEmptyCell { row, col }),
                (1.., None) => return Err(DescriptorError::MissingColor { row, col }),
                _ => {}
            }
            cells.push((cell.count, owner));
        }
        grid.push(cells);
    }
    Ok(Board::from_rows(grid))
}

/// Compute the automated player's move for an inbound board. Stateless:
/// every call rebuilds the board from the descriptor.
pub fn ai_move(descriptor: &BoardDescriptor) -> Result<MoveDescriptor, ApiError> {
    let board = board_from_descriptor(descriptor)?;
    let chosen = MinimaxSearch::default().best_move(&board)?;
    Ok(MoveDescriptor {
        row: chosen.row,
        col: chosen.col,
    })
}
