//! Player identification.
//!
//! ## Player
//!
//! Connect Four has exactly two sides. Each is tied to the signed marker it
//! leaves on the board: `A` is `+1`, `B` is `-1`, and the empty cell is `0`.
//! Empty is a cell state, never a player, so `Player` has no third variant.

use serde::{Deserialize, Serialize};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, marker `+1`, maximizes scores.
    A,
    /// Moves second, marker `-1`, minimizes scores.
    B,
}

impl Player {
    /// Both players in move order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The other player (the additive inverse of this player's marker).
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The signed cell value this player leaves on the board.
    #[inline]
    #[must_use]
    pub const fn marker(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Sign as a float, used to orient scores toward a player.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Player::A => 1.0,
            Player::B => -1.0,
        }
    }

    /// Look up the player owning a cell value. Returns `None` for empty.
    #[must_use]
    pub const fn from_marker(marker: i8) -> Option<Self> {
        match marker {
            1 => Some(Player::A),
            -1 => Some(Player::B),
            _ => None,
        }
    }

    /// The saturating terminal score for a forced win by this player.
    #[inline]
    #[must_use]
    pub fn win_score(self) -> f64 {
        self.sign() * f64::INFINITY
    }

    /// Character used when rendering the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

impl std::ops::Neg for Player {
    type Output = Player;

    fn neg(self) -> Self::Output {
        self.other()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}
