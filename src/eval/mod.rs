//! Leaf evaluation for depth-limited search.
//!
//! Two interchangeable evaluators score positions where alpha-beta stops
//! before the game ends:
//!
//! - `heuristic`: static window scoring (deterministic, the default)
//! - `rollout`: average result of random playouts (noisy, needs an RNG)
//!
//! [`LeafEvaluator`] is the tagged choice between them. All scores are
//! finite and oriented toward player A.

pub mod heuristic;
pub mod rollout;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameRng, Player};

pub use heuristic::{evaluate, evaluate_streaks, HeuristicWeights, StreakWeights};
pub use rollout::{estimate, rollout};

/// Which evaluator scores non-terminal search leaves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeafEvaluator {
    /// Open-window scoring with threat weighting.
    Heuristic(HeuristicWeights),
    /// Run-of-three and run-of-two counting.
    Streaks(StreakWeights),
    /// Mean outcome of `samples` random playouts.
    Rollout { samples: u32 },
}

impl Default for LeafEvaluator {
    fn default() -> Self {
        LeafEvaluator::Heuristic(HeuristicWeights::default())
    }
}

impl LeafEvaluator {
    /// Score `board`, where `last_mover` made the move that produced it.
    ///
    /// Only the rollout evaluator consumes randomness.
    pub fn evaluate(&self, board: &Board, last_mover: Player, rng: &mut GameRng) -> f64 {
        match self {
            LeafEvaluator::Heuristic(weights) => evaluate(board, weights),
            LeafEvaluator::Streaks(weights) => evaluate_streaks(board, weights),
            LeafEvaluator::Rollout { samples } => estimate(board, last_mover, *samples, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_heuristic() {
        assert!(matches!(LeafEvaluator::default(), LeafEvaluator::Heuristic(_)));
    }

    #[test]
    fn test_dispatch() {
        let board = Board::from_moves(&[3, 3, 3], Player::A).unwrap();
        let mut rng = GameRng::new(9);

        let heuristic = LeafEvaluator::default().evaluate(&board, Player::A, &mut rng);
        assert_eq!(heuristic, evaluate(&board, &HeuristicWeights::default()));

        let rollout = LeafEvaluator::Rollout { samples: 20 }.evaluate(&board, Player::A, &mut rng);
        assert!((-1.0..=1.0).contains(&rollout));
    }

    #[test]
    fn test_serialization() {
        let evaluator = LeafEvaluator::Rollout { samples: 16 };
        let json = serde_json::to_string(&evaluator).unwrap();
        assert_eq!(json, r#"{"kind":"rollout","samples":16}"#);

        let deserialized: LeafEvaluator = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, evaluator);
    }
}
