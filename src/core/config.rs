//! Engine configuration.
//!
//! The driver picks a search strategy per side. Configurations are plain
//! serde types so they can be loaded from JSON:
//!
//! ```
//! use connect4_engine::core::{EngineConfig, Strategy};
//!
//! let config = EngineConfig::from_json(r#"{
//!     "player_a": { "kind": "alpha_beta", "depth": 4 },
//!     "player_b": { "kind": "mcts", "exploration_constant": 1.0, "iterations": 200, "seed": 1 }
//! }"#).unwrap();
//!
//! assert!(matches!(config.player_a, Strategy::AlphaBeta(ref c) if c.depth == 4));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Player;
use crate::eval::LeafEvaluator;
use crate::mcts::MCTSConfig;
use crate::search::AlphaBetaConfig;

/// How a side picks its moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-limited alpha-beta with a leaf evaluator.
    AlphaBeta(AlphaBetaConfig),
    /// Monte Carlo Tree Search with random rollouts.
    Mcts(MCTSConfig),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::AlphaBeta(AlphaBetaConfig::default())
    }
}

impl Strategy {
    /// Check the strategy's parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Strategy::AlphaBeta(config) => match config.evaluator {
                LeafEvaluator::Rollout { samples: 0 } => Err(ConfigError::Invalid(
                    "rollout evaluator needs at least one sample".to_string(),
                )),
                LeafEvaluator::Heuristic(w)
                    if !(w.threat_weight.is_finite() && w.base_weight.is_finite()) =>
                {
                    Err(ConfigError::Invalid("heuristic weights must be finite".to_string()))
                }
                _ => Ok(()),
            },
            Strategy::Mcts(config) => {
                if config.iterations == 0 {
                    return Err(ConfigError::Invalid(
                        "mcts needs at least one iteration per move".to_string(),
                    ));
                }
                if !config.exploration_constant.is_finite() || config.exploration_constant < 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "exploration constant must be finite and non-negative, got {}",
                        config.exploration_constant
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Strategy for each side plus the game seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strategy for player A.
    #[serde(default)]
    pub player_a: Strategy,

    /// Strategy for player B.
    #[serde(default)]
    pub player_b: Strategy,

    /// Seed the per-side RNG streams are forked from.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player_a: Strategy::default(),
            player_b: Strategy::default(),
            seed: default_seed(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check both strategies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player_a.validate()?;
        self.player_b.validate()
    }

    /// The strategy for `player`.
    #[must_use]
    pub fn strategy(&self, player: Player) -> &Strategy {
        match player {
            Player::A => &self.player_a,
            Player::B => &self.player_b,
        }
    }

    /// Set player A's strategy.
    pub fn with_player_a(mut self, strategy: Strategy) -> Self {
        self.player_a = strategy;
        self
    }

    /// Set player B's strategy.
    pub fn with_player_b(mut self, strategy: Strategy) -> Self {
        self.player_b = strategy;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert!(matches!(config.player_a, Strategy::AlphaBeta(ref c) if c.depth == 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strategy_lookup() {
        let config = EngineConfig::default().with_player_b(Strategy::Mcts(MCTSConfig::default()));
        assert!(matches!(config.strategy(Player::A), Strategy::AlphaBeta(_)));
        assert!(matches!(config.strategy(Player::B), Strategy::Mcts(_)));
    }

    #[test]
    fn test_round_trip() {
        let config = EngineConfig::default()
            .with_player_b(Strategy::Mcts(MCTSConfig::default().with_iterations(64)))
            .with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let json = r#"{"player_b": {"kind": "mcts", "exploration_constant": 1.0, "iterations": 0, "seed": 1}}"#;
        let err = EngineConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let strategy = Strategy::AlphaBeta(
            AlphaBetaConfig::default().with_evaluator(LeafEvaluator::Rollout { samples: 0 }),
        );
        assert!(strategy.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_exploration() {
        let strategy = Strategy::Mcts(MCTSConfig::default().with_exploration(-1.0));
        assert!(strategy.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/connect4.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
