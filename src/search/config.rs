//! Alpha-beta configuration parameters.

use serde::{Deserialize, Serialize};

use crate::eval::LeafEvaluator;

/// Alpha-beta configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlphaBetaConfig {
    /// Search depth in plies.
    /// Depth 0 evaluates the position without choosing a move.
    pub depth: u32,

    /// Evaluator used at non-terminal leaves.
    #[serde(default)]
    pub evaluator: LeafEvaluator,

    /// Random seed, only consumed by the rollout evaluator.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            evaluator: LeafEvaluator::default(),
            seed: default_seed(),
        }
    }
}

impl AlphaBetaConfig {
    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the leaf evaluator.
    pub fn with_evaluator(mut self, evaluator: LeafEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
