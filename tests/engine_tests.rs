//! Engine configuration and self-play integration tests.

mod common;

use connect4_engine::board::{outcome, Board, Outcome};
use connect4_engine::core::{EngineConfig, GameRng, Player, Strategy};
use connect4_engine::engine::{play_game, Engine};
use connect4_engine::eval::LeafEvaluator;
use connect4_engine::mcts::MCTSConfig;
use connect4_engine::search::AlphaBetaConfig;

use common::drawn_board;

#[test]
fn test_config_from_json() {
    let config = EngineConfig::from_json(
        r#"{
            "player_a": { "kind": "alpha_beta", "depth": 3, "evaluator": { "kind": "rollout", "samples": 8 } },
            "player_b": { "kind": "mcts", "iterations": 120 },
            "seed": 5
        }"#,
    )
    .unwrap();

    assert_eq!(
        config.player_a,
        Strategy::AlphaBeta(
            AlphaBetaConfig::default()
                .with_depth(3)
                .with_evaluator(LeafEvaluator::Rollout { samples: 8 })
        )
    );
    assert_eq!(
        config.player_b,
        Strategy::Mcts(MCTSConfig::default().with_iterations(120))
    );
    assert_eq!(config.seed, 5);
}

#[test]
fn test_engine_blocks_threat() {
    // B threatens the bottom row at column 4
    let board = Board::from_moves(&[0, 1, 6, 2, 6, 3], Player::A).unwrap();
    let strategy = Strategy::AlphaBeta(AlphaBetaConfig::default().with_depth(4));
    let mut engine = Engine::new(strategy, GameRng::new(3));

    assert_eq!(engine.choose_move(&board, Player::A).unwrap(), Some(4));
}

#[test]
fn test_engine_declines_on_finished_board() {
    let mut engine = Engine::new(Strategy::Mcts(MCTSConfig::default()), GameRng::new(3));
    assert_eq!(engine.choose_move(&drawn_board(), Player::B).unwrap(), None);
}

#[test]
fn test_alpha_beta_mirror_match() {
    let strategy = Strategy::AlphaBeta(AlphaBetaConfig::default().with_depth(3));
    let config = EngineConfig::default()
        .with_player_a(strategy.clone())
        .with_player_b(strategy);

    let mut boards = Vec::new();
    let record = play_game(&config, |board, _, _| boards.push(*board)).unwrap();

    assert_eq!(boards.len(), record.moves.len());
    assert_eq!(boards.last(), Some(&record.board));
    assert_eq!(outcome(&record.board), Some(record.outcome));

    // Replaying the moves reproduces the final board
    let replay = Board::from_moves(&record.moves, Player::A).unwrap();
    assert_eq!(replay, record.board);
}

#[test]
fn test_strong_alpha_beta_beats_weak_mcts() {
    let config = EngineConfig::default()
        .with_player_a(Strategy::AlphaBeta(AlphaBetaConfig::default().with_depth(4)))
        .with_player_b(Strategy::Mcts(MCTSConfig::default().with_iterations(1)))
        .with_seed(21);

    let record = play_game(&config, |_, _, _| {}).unwrap();
    assert_eq!(record.outcome, Outcome::Win(Player::A));
}
