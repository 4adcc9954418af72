//! Monte Carlo Tree Search for Connect Four.
//!
//! ## Overview
//!
//! Plain UCB1 search over an arena tree. Every node stores its own board
//! snapshot and the player to move there; statistics are plain counts:
//!
//! - **Selection**: UCB1 with a configurable exploration constant (default 1)
//! - **Expansion**: one child per legal column, created all at once
//! - **Simulation**: a single uniformly random rollout per iteration
//! - **Backpropagation**: a node records a win when the rollout winner is
//!   not the player to move at that node, so wins are counted from the
//!   perspective of the player who moved into it
//! - **Serializable**: tree and config can be saved and loaded
//!
//! ## Usage
//!
//! ```rust
//! use connect4_engine::board::Board;
//! use connect4_engine::core::Player;
//! use connect4_engine::mcts::{MCTSConfig, MCTSSearch};
//!
//! let config = MCTSConfig::default().with_iterations(300);
//! let mut search = MCTSSearch::new(Board::new(), Player::A, config);
//!
//! if let Some(column) = search.search().unwrap() {
//!     println!("Best column: {column}");
//! }
//!
//! for (column, visits, ratio) in search.root_statistics() {
//!     println!("{column}: {visits} visits, {:.2}", ratio);
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{best_by_ratio, fully_visited, select_ucb1, ucb1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
