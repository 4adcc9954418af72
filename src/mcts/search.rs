//! Core MCTS search algorithm.
//!
//! Each iteration runs one select → expand → simulate → backpropagate
//! cycle:
//!
//! 1. Descend by UCB1 while the current node has children and all of them
//!    have been visited.
//! 2. Stop if that node is terminal.
//! 3. Expand it if it has no children yet.
//! 4. Pick an unvisited child at random and play one random rollout from it.
//! 5. Credit the result to that child and every ancestor.
//!
//! The move to play is the root child with the best win ratio.

use std::time::Instant;

use log::{debug, trace};

use crate::board::{is_terminal, Board, Column};
use crate::core::{BoardError, GameRng, Player};
use crate::eval::rollout;

use super::config::MCTSConfig;
use super::node::{MCTSNode, NodeId};
use super::policy::{best_by_ratio, fully_visited, select_ucb1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// MCTS search rooted at one game position.
///
/// Owns the tree, configuration and RNG. Create one per real move; use
/// [`advance`](Self::advance) to continue from the chosen child with a
/// fresh tree.
///
/// ```
/// use connect4_engine::board::Board;
/// use connect4_engine::core::Player;
/// use connect4_engine::mcts::{MCTSConfig, MCTSSearch};
///
/// let mut search = MCTSSearch::new(Board::new(), Player::A, MCTSConfig::default().with_seed(7));
/// for _ in 0..200 {
///     search.run_iteration().unwrap();
/// }
/// let column = search.best_child().unwrap();
/// assert!(column < 7);
/// ```
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// The search tree.
    tree: MCTSTree,

    /// RNG for expansion picks and rollouts.
    rng: GameRng,

    /// Search statistics.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a search rooted at `board` with `to_move` to play.
    pub fn new(board: Board, to_move: Player, config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(board, to_move, config, rng)
    }

    /// Create a search that draws from an existing RNG stream.
    pub fn with_rng(board: Board, to_move: Player, config: MCTSConfig, rng: GameRng) -> Self {
        Self {
            tree: MCTSTree::new(board, to_move),
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Run the configured number of iterations and return the best move.
    pub fn search(&mut self) -> Result<Option<Column>, BoardError> {
        let start = Instant::now();

        for _ in 0..self.config.iterations {
            self.run_iteration()?;
        }

        self.stats.time_us += start.elapsed().as_micros() as u64;
        let best = self.best_child();

        debug!(
            "mcts {}: move {:?} after {} iterations ({} nodes, {} simulations)",
            self.tree.root_node().to_move,
            best,
            self.stats.iterations,
            self.tree.len(),
            self.stats.simulations
        );
        Ok(best)
    }

    /// Run one select → expand → simulate → backpropagate cycle.
    ///
    /// Returns `false` when the iteration stopped at a terminal node
    /// without simulating.
    pub fn run_iteration(&mut self) -> Result<bool, BoardError> {
        self.stats.iterations += 1;

        // === SELECTION ===
        let mut current = self.tree.root();
        while fully_visited(&self.tree, current) {
            match select_ucb1(&self.tree, current, self.config.exploration_constant) {
                Some(child) => current = child,
                None => break,
            }
        }

        if is_terminal(&self.tree.get(current).board) {
            self.stats.terminal_hits += 1;
            return Ok(false);
        }

        // === EXPANSION ===
        if !self.tree.get(current).is_expanded() {
            self.tree.expand(current)?;
            self.stats.nodes_expanded += 1;
        }

        let unvisited: Vec<NodeId> = self
            .tree
            .children(current)
            .filter(|(_, child)| child.visits == 0)
            .map(|(id, _)| id)
            .collect();
        let Some(&leaf) = self.rng.choose(&unvisited) else {
            return Ok(false);
        };

        // === SIMULATION ===
        let node = self.tree.get(leaf);
        let winner = rollout(&node.board, node.to_move.other(), &mut self.rng);
        self.stats.simulations += 1;
        trace!("simulated from {} (column {:?}): winner {:?}", leaf, node.column, winner);

        // === BACKPROPAGATION ===
        self.tree.backpropagate(leaf, winner);
        Ok(true)
    }

    /// The root child with the highest win ratio, as a column.
    ///
    /// `None` when the root was never expanded: no recommendation yet.
    #[must_use]
    pub fn best_child(&self) -> Option<Column> {
        self.best_child_node().and_then(|node| node.column)
    }

    /// The root child with the highest win ratio.
    #[must_use]
    pub fn best_child_node(&self) -> Option<&MCTSNode> {
        best_by_ratio(&self.tree, self.tree.root()).map(|id| self.tree.get(id))
    }

    /// Start a fresh search from the position after `column` is played.
    ///
    /// The current tree is discarded; the RNG stream carries over.
    pub fn advance(self, column: Column) -> Result<Self, BoardError> {
        let root = self.tree.root_node();
        let board = root.board.with_move(column, root.to_move)?;
        let to_move = root.to_move.other();
        Ok(Self::with_rng(board, to_move, self.config, self.rng))
    }

    /// Per-column (visits, win ratio) at the root, in column order.
    pub fn root_statistics(&self) -> Vec<(Column, u32, f64)> {
        self.tree
            .children(self.tree.root())
            .filter_map(|(_, child)| child.column.map(|c| (c, child.visits, child.win_ratio())))
            .collect()
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
