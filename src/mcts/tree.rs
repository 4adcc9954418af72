//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. Nodes are never
//! removed; the whole tree is dropped when the game moves past its root.

use serde::{Deserialize, Serialize};

use super::node::{MCTSNode, NodeId};
use crate::board::Board;
use crate::core::{BoardError, Player};

/// Arena-based MCTS tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// This avoids reference counting overhead and enables serialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl MCTSTree {
    /// Create a new tree rooted at `board` with `to_move` to play.
    pub fn new(board: Board, to_move: Player) -> Self {
        Self::with_capacity(board, to_move, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(board: Board, to_move: Player, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(board, to_move));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create one child per legal move of a childless node.
    ///
    /// Each child holds its own copy of the board with the move applied and
    /// the opponent to move. Returns the number of children created (zero
    /// if the node was already expanded or has no legal moves).
    pub fn expand(&mut self, id: NodeId) -> Result<usize, BoardError> {
        let node = self.get(id);
        if node.is_expanded() {
            return Ok(0);
        }

        let board = node.board;
        let mover = node.to_move;
        let depth = node.depth + 1;

        let mut created = 0;
        for column in board.legal_moves() {
            let child_board = board.with_move(column, mover)?;
            let child = MCTSNode::new(child_board, mover.other(), Some(column), id, depth);
            let child_id = self.alloc(child);
            self.get_mut(id).children.push(child_id);
            created += 1;
        }
        Ok(created)
    }

    /// Credit a simulation result to `from` and every ancestor up to the root.
    pub fn backpropagate(&mut self, from: NodeId, winner: Option<Player>) {
        let mut current = from;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.record(winner);
            current = node.parent;
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let expanded_nodes = self.nodes.iter().filter(|n| n.is_expanded()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            expanded_nodes,
            total_children,
            root_visits: self.root_node().visits,
        }
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Children of a node, with their IDs, in column order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.get(id).children.iter().map(move |&c| (c, self.get(c)))
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of nodes with children.
    pub expanded_nodes: usize,

    /// Total number of child links.
    pub total_children: usize,

    /// Simulations that reached the root.
    pub root_visits: u32,
}

impl TreeStats {
    /// Get the branching factor (average children per expanded node).
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_nodes == 0 {
            0.0
        } else {
            self.total_children as f64 / self.expanded_nodes as f64
        }
    }
}
