//! # connect4-engine
//!
//! A Connect Four decision engine: given a position and the side to move,
//! recommend a column.
//!
//! ## Design
//!
//! 1. **Small copyable board**: a 7x6 grid of signed markers (`+1` for A,
//!    `-1` for B, `0` empty) plus per-column heights. Moves drop into the
//!    lowest empty cell and can be undone exactly.
//!
//! 2. **Two searches**: depth-limited alpha-beta over a leaf evaluator, and
//!    UCB1 Monte Carlo Tree Search with random rollouts.
//!
//! 3. **Scores favor A**: positive is good for A, negative for B, `±∞` for
//!    a forced win.
//!
//! 4. **Deterministic**: every random choice draws from a seeded
//!    [`GameRng`](core::GameRng).
//!
//! ## Modules
//!
//! - `core`: players, errors, RNG, configuration
//! - `board`: board state, legality, apply/undo, line detection
//! - `eval`: heuristic and rollout leaf evaluators
//! - `search`: alpha-beta search
//! - `mcts`: Monte Carlo Tree Search
//! - `engine`: per-side move selection and engine-vs-engine games

pub mod board;
pub mod core;
pub mod engine;
pub mod eval;
pub mod mcts;
pub mod search;

// Re-export commonly used types
pub use crate::core::{BoardError, ConfigError, EngineConfig, GameRng, Player, Strategy};

pub use crate::board::{
    has_line, is_terminal, outcome, winner, Board, Column, Outcome, COLUMN_HEIGHT, NUM_COLUMNS,
};

pub use crate::eval::{estimate, evaluate, rollout, HeuristicWeights, LeafEvaluator};

pub use crate::search::{AlphaBeta, AlphaBetaConfig, SearchResult};

pub use crate::mcts::{MCTSConfig, MCTSNode, MCTSSearch, MCTSTree, NodeId, SearchStats, TreeStats};

pub use crate::engine::{play_game, Engine, GameRecord};
