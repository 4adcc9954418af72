//! Static position evaluation for non-terminal search leaves.
//!
//! Scores are oriented toward player A: positive favors A, negative favors B.
//!
//! # Window evaluation
//!
//! Every window of four cells that holds no opponent marker is open for a
//! player. An open window contributes the sum of the player's markers in it
//! (so B's contributions are negative). Windows one move from winning (three
//! own markers) are weighted `threat_weight`, the rest `base_weight`. The
//! heavy threat weight makes the search favor creating and blocking
//! immediate threats over piling up markers.
//!
//! # Streak evaluation
//!
//! The simpler scheme counts uniform runs of three and two per player with
//! separate weights for A and B.

use serde::{Deserialize, Serialize};

use crate::board::lines::{windows, window_markers, FOUR};
use crate::board::{count_streaks, Board};
use crate::core::Player;

/// Weights for the open-window evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Multiplier for windows holding three own markers.
    pub threat_weight: f64,
    /// Multiplier for every other non-empty open window.
    pub base_weight: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            threat_weight: 10.0,
            base_weight: 1.0,
        }
    }
}

impl HeuristicWeights {
    /// Set the threat multiplier.
    pub fn with_threat_weight(mut self, weight: f64) -> Self {
        self.threat_weight = weight;
        self
    }

    /// Set the base multiplier.
    pub fn with_base_weight(mut self, weight: f64) -> Self {
        self.base_weight = weight;
        self
    }
}

/// Weights for the streak-count evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StreakWeights {
    /// Per run of three, for A and B.
    pub three: (f64, f64),
    /// Per run of two that is not part of a counted three, for A and B.
    pub two: (f64, f64),
}

impl Default for StreakWeights {
    fn default() -> Self {
        Self {
            three: (10.0, 7.0),
            two: (5.0, 4.0),
        }
    }
}

/// Score the position with the open-window evaluator.
///
/// ```
/// use connect4_engine::board::Board;
/// use connect4_engine::core::Player;
/// use connect4_engine::eval::{evaluate, HeuristicWeights};
///
/// let board = Board::from_moves(&[3], Player::A).unwrap();
/// assert!(evaluate(&board, &HeuristicWeights::default()) > 0.0);
/// ```
#[must_use]
pub fn evaluate(board: &Board, weights: &HeuristicWeights) -> f64 {
    Player::ALL
        .into_iter()
        .map(|player| player_windows(board, player, weights))
        .sum()
}

/// Weighted sum of `player`'s open windows (signed by the player's marker).
fn player_windows(board: &Board, player: Player, weights: &HeuristicWeights) -> f64 {
    let opponent = player.other().marker();
    let mut total = 0.0;

    for (column, row, dir) in windows(FOUR) {
        let mut sum = 0i32;
        let mut blocked = false;
        for marker in window_markers(board, column, row, dir, FOUR) {
            if marker == opponent {
                blocked = true;
                break;
            }
            sum += i32::from(marker);
        }
        if blocked || sum == 0 {
            continue;
        }

        let weight = if sum.abs() == 3 {
            weights.threat_weight
        } else {
            weights.base_weight
        };
        total += f64::from(sum) * weight;
    }

    total
}

/// Score the position by counting runs of three and two.
#[must_use]
pub fn evaluate_streaks(board: &Board, weights: &StreakWeights) -> f64 {
    let three_a = count_streaks(board, Player::A, 3) as f64;
    let three_b = count_streaks(board, Player::B, 3) as f64;
    let two_a = count_streaks(board, Player::A, 2) as f64 - three_a;
    let two_b = count_streaks(board, Player::B, 2) as f64 - three_b;

    weights.three.0 * three_a - weights.three.1 * three_b + weights.two.0 * two_a
        - weights.two.1 * two_b
}
