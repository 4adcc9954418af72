//! MCTS integration tests.

mod common;

use proptest::prelude::*;

use connect4_engine::board::{winner, Board, NUM_COLUMNS};
use connect4_engine::core::{GameRng, Player};
use connect4_engine::eval::{estimate, rollout};
use connect4_engine::mcts::{MCTSConfig, MCTSSearch, MCTSTree, NodeId};

use common::{drawn_board, reachable_board};

/// Every visited non-root node was simulated once itself; the root never is.
fn assert_visit_counts(tree: &MCTSTree) {
    for (id, node) in tree.iter() {
        let child_visits: u32 = tree.children(id).map(|(_, c)| c.visits).sum();
        assert!(node.wins <= node.visits, "node {id}: {} wins > {} visits", node.wins, node.visits);

        if id == tree.root() {
            assert_eq!(node.visits, child_visits, "root");
        } else if node.visits == 0 {
            assert!(node.children.is_empty(), "unvisited node {id} has children");
        } else {
            assert_eq!(node.visits, 1 + child_visits, "node {id}");
        }
    }
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_mcts_returns_move() {
    let config = MCTSConfig::default().with_iterations(100);
    let mut search = MCTSSearch::new(Board::new(), Player::A, config);

    let column = search.search().unwrap();
    assert!(column.is_some_and(|c| c < NUM_COLUMNS));
}

#[test]
fn test_mcts_with_low_iterations() {
    let config = MCTSConfig::default().with_iterations(1);
    let mut search = MCTSSearch::new(Board::new(), Player::B, config);

    // One iteration expands the root and visits one child
    assert!(search.search().unwrap().is_some());
    assert_eq!(search.tree().root_node().visits, 1);
}

#[test]
fn test_mcts_takes_immediate_win() {
    let board = Board::from_moves(&[0, 6, 0, 6, 0, 6], Player::A).unwrap();
    let config = MCTSConfig::default().with_iterations(300);
    let mut search = MCTSSearch::new(board, Player::A, config);

    assert_eq!(search.search().unwrap(), Some(0));
}

#[test]
fn test_mcts_full_board() {
    let config = MCTSConfig::default().with_iterations(20);
    let mut search = MCTSSearch::new(drawn_board(), Player::A, config);

    assert_eq!(search.search().unwrap(), None);
    assert_eq!(search.stats().terminal_hits, 20);
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_mcts_deterministic_with_seed() {
    let board = Board::from_moves(&[3, 3, 2], Player::A).unwrap();
    let config = MCTSConfig::default().with_iterations(200).with_seed(99);

    let mut search1 = MCTSSearch::new(board, Player::B, config.clone());
    let mut search2 = MCTSSearch::new(board, Player::B, config);

    assert_eq!(search1.search().unwrap(), search2.search().unwrap());
    assert_eq!(search1.tree().len(), search2.tree().len());
    assert_eq!(search1.root_statistics(), search2.root_statistics());
}

// =============================================================================
// Tree Invariants
// =============================================================================

#[test]
fn test_visit_counts_after_search() {
    let config = MCTSConfig::default().with_iterations(400);
    let mut search = MCTSSearch::new(Board::new(), Player::A, config);
    search.search().unwrap();

    assert_visit_counts(search.tree());

    let stats = search.tree().stats();
    assert_eq!(stats.root_visits, search.stats().simulations);
    assert!(stats.max_depth >= 2);
}

#[test]
fn test_parent_links() {
    let config = MCTSConfig::default().with_iterations(100);
    let mut search = MCTSSearch::new(Board::new(), Player::A, config);
    search.search().unwrap();

    let tree = search.tree();
    for (id, node) in tree.iter() {
        if node.parent == NodeId::NONE {
            assert_eq!(id, tree.root());
            continue;
        }
        let parent = tree.get(node.parent);
        assert!(parent.children.contains(&id));
        assert_eq!(parent.to_move.other(), node.to_move);
        assert_eq!(parent.depth + 1, node.depth);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_visit_counts_hold(
        columns in prop::collection::vec(0..NUM_COLUMNS, 0..30),
        iterations in 1u32..150,
        seed in any::<u64>(),
    ) {
        let (board, player) = reachable_board(&columns);
        let config = MCTSConfig::default().with_iterations(iterations).with_seed(seed);
        let mut search = MCTSSearch::new(board, player, config);

        let column = search.search().unwrap();
        assert_visit_counts(search.tree());
        if let Some(column) = column {
            prop_assert!(board.is_legal(column));
        }
    }
}

// =============================================================================
// Rollouts
// =============================================================================

#[test]
fn test_rollout_ends_the_game() {
    let board = Board::from_moves(&[3, 3, 4], Player::A).unwrap();
    let mut rng = GameRng::new(5);

    for _ in 0..50 {
        let result = rollout(&board, Player::A, &mut rng);
        assert!(matches!(result, None | Some(Player::A) | Some(Player::B)));
    }
    // The input is left as it was
    assert_eq!(board, Board::from_moves(&[3, 3, 4], Player::A).unwrap());
}

#[test]
fn test_rollout_on_finished_boards() {
    let mut rng = GameRng::new(5);
    assert_eq!(rollout(&drawn_board(), Player::A, &mut rng), None);

    let won = Board::from_moves(&[1, 0, 1, 0, 1, 0, 1], Player::A).unwrap();
    assert_eq!(winner(&won), Some(Player::A));
    assert_eq!(rollout(&won, Player::B, &mut rng), Some(Player::A));
}

#[test]
fn test_estimate_range_and_extremes() {
    let mut rng = GameRng::new(8);
    let score = estimate(&Board::new(), Player::B, 64, &mut rng);
    assert!((-1.0..=1.0).contains(&score));

    let won = Board::from_moves(&[1, 0, 1, 0, 1, 0, 1], Player::A).unwrap();
    assert_eq!(estimate(&won, Player::A, 10, &mut rng), 1.0);
    assert_eq!(estimate(&drawn_board(), Player::A, 10, &mut rng), 0.0);
}
