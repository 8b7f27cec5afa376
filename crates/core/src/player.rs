//! Player identity and wire color codes.

use serde::{Deserialize, Serialize};

/// One of the two sides. The automated player is always `Ai`.
///
/// Cell ownership is `Option<Player>` — `None` marks an unowned cell, so
/// the two live values are never overloaded as sentinels.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// Single-character color code used on the wire: human `'R'`, AI `'B'`.
    pub fn color(self) -> char {
        match self {
            Player::Human => 'R',
            Player::Ai => 'B',
        }
    }

    pub fn from_color(c: char) -> Option<Self> {
        match c {
            'R' => Some(Player::Human),
            'B' => Some(Player::Ai),
            _ => None,
        }
    }
}
