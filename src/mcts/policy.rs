//! Child selection rules.
//!
//! - UCB1 while descending the tree (exploration plus exploitation)
//! - Highest win ratio when picking the move to play (exploitation only)
//!
//! Both scan children in column order and keep the first of equal scores.

use super::node::NodeId;
use super::tree::MCTSTree;

/// UCB1 (Upper Confidence Bound) score of a visited child.
///
/// Formula: wins/visits + c * sqrt(ln(parent_visits) / visits)
#[inline]
#[must_use]
pub fn ucb1(wins: u32, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    let visits = f64::from(visits.max(1));
    let exploitation = f64::from(wins) / visits;
    let exploration_term =
        exploration * (f64::from(parent_visits.max(1)).ln() / visits).sqrt();
    exploitation + exploration_term
}

/// Does the node have children, all of them visited at least once?
///
/// Selection only descends through such nodes.
#[must_use]
pub fn fully_visited(tree: &MCTSTree, id: NodeId) -> bool {
    let node = tree.get(id);
    node.is_expanded() && tree.children(id).all(|(_, child)| child.visits > 0)
}

/// The child with the highest UCB1 score.
#[must_use]
pub fn select_ucb1(tree: &MCTSTree, id: NodeId, exploration: f64) -> Option<NodeId> {
    let parent_visits = tree.get(id).visits;
    first_max(tree.children(id).map(|(child_id, child)| {
        (child_id, ucb1(child.wins, child.visits, parent_visits, exploration))
    }))
}

/// The child with the highest observed win ratio.
#[must_use]
pub fn best_by_ratio(tree: &MCTSTree, id: NodeId) -> Option<NodeId> {
    first_max(tree.children(id).map(|(child_id, child)| (child_id, child.win_ratio())))
}

/// First entry with the strictly greatest score.
fn first_max(scored: impl Iterator<Item = (NodeId, f64)>) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for (id, score) in scored {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, _)| id)
}
