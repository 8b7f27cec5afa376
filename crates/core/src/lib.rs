//! Cascade core crate - fundamental types for Chain Reaction boards.

mod board;
mod cell;
mod moves;
mod player;

pub use board::Board;
pub use cell::{Cell, CellKind};
pub use moves::{Coord, Placement};
pub use player::Player;
