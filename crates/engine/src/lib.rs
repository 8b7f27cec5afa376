//! cascade-engine - Chain Reaction game logic and simulation engine.
//!
//! Provides move enumeration and move application with cascade resolution.

pub mod apply;
pub mod movegen;

pub use apply::{apply_move, apply_move_mut, WAVE_CAP};
pub use movegen::{is_valid_move, valid_moves};
