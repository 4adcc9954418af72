//! MCTS node structure.
//!
//! Nodes live in the [`MCTSTree`](super::MCTSTree) arena and refer to each
//! other by [`NodeId`] index. A parent owns its children through the arena;
//! the `parent` index is a read-only back-reference set once at creation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Column, NUM_COLUMNS};
use crate::core::Player;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A position in the MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Snapshot of the position at this node.
    pub board: Board,

    /// Player to move at this node.
    pub to_move: Player,

    /// Column played from the parent to reach this node (`None` for root).
    pub column: Option<Column>,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Times a simulation passed through this node.
    pub visits: u32,

    /// Simulations credited to this node: those whose winner was not
    /// `to_move`, i.e. good outcomes for the parent's mover.
    pub wins: u32,

    /// One child per legal move, created together on first expansion.
    pub children: SmallVec<[NodeId; NUM_COLUMNS]>,
}

impl MCTSNode {
    /// Create a new node.
    pub fn new(
        board: Board,
        to_move: Player,
        column: Option<Column>,
        parent: NodeId,
        depth: u16,
    ) -> Self {
        Self {
            board,
            to_move,
            column,
            parent,
            depth,
            visits: 0,
            wins: 0,
            children: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root(board: Board, to_move: Player) -> Self {
        Self::new(board, to_move, None, NodeId::NONE, 0)
    }

    /// Is this the root?
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Has this node been expanded?
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Observed win ratio (0 when unvisited).
    #[must_use]
    pub fn win_ratio(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.visits)
        }
    }

    /// Credit one simulation that ended with `winner` (`None` for a draw).
    pub fn record(&mut self, winner: Option<Player>) {
        self.visits += 1;
        if winner != Some(self.to_move) {
            self.wins += 1;
        }
    }
}
