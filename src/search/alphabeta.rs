//! Depth-limited minimax with fail-hard alpha-beta pruning.
//!
//! Player A maximizes and player B minimizes a single score oriented toward
//! A. A forced win is scored as a signed infinity, which outranks every
//! finite leaf evaluation at any depth.
//!
//! The search mutates one board in place. Every move is applied through a
//! [`ScopedMove`](crate::board::ScopedMove) guard held in the same frame as
//! the recursive call, so the board is back in its original state whenever
//! a call returns, including on error.
//!
//! # Example
//!
//! ```
//! use connect4_engine::board::Board;
//! use connect4_engine::core::Player;
//! use connect4_engine::search::{AlphaBeta, AlphaBetaConfig};
//!
//! // A has three stacked in column 3
//! let mut board = Board::from_moves(&[3, 0, 3, 0, 3, 1], Player::A).unwrap();
//! let mut searcher = AlphaBeta::new(AlphaBetaConfig::default().with_depth(2));
//!
//! let result = searcher.search(&mut board, Player::A).unwrap();
//! assert_eq!(result.best_move, Some(3));
//! assert_eq!(result.score, f64::INFINITY);
//! ```

use log::debug;

use crate::board::{has_line, Board, Column};
use crate::core::{BoardError, GameRng, Player};
use crate::eval::LeafEvaluator;

use super::config::AlphaBetaConfig;

/// Result of an alpha-beta search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    /// Best move found. `None` at depth 0 and in finished positions.
    pub best_move: Option<Column>,
    /// Score oriented toward player A; `±∞` for a forced win.
    pub score: f64,
    /// Positions visited.
    pub nodes: u64,
}

/// Is `score` strictly better than `best` for `player`?
///
/// Strict comparison: on ties the earlier (lower column) move is kept.
#[inline]
#[must_use]
pub fn score_is_better(score: f64, best: f64, player: Player) -> bool {
    match player {
        Player::A => score > best,
        Player::B => score < best,
    }
}

/// Alpha-beta search engine.
pub struct AlphaBeta {
    config: AlphaBetaConfig,
    rng: GameRng,
    nodes: u64,
}

impl AlphaBeta {
    /// Create a searcher. The RNG is seeded from the configuration.
    #[must_use]
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            nodes: 0,
        }
    }

    /// Replace the RNG used by the rollout evaluator.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Search to the configured depth with a full window.
    pub fn search(&mut self, board: &mut Board, player: Player) -> Result<SearchResult, BoardError> {
        let result = self.search_window(
            board,
            self.config.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            player,
        )?;

        debug!(
            "alpha-beta {} depth {}: move {:?} score {} ({} nodes)",
            player, self.config.depth, result.best_move, result.score, result.nodes
        );
        Ok(result)
    }

    /// Search with an explicit depth and window.
    pub fn search_window(
        &mut self,
        board: &mut Board,
        depth: u32,
        alpha: f64,
        beta: f64,
        player: Player,
    ) -> Result<SearchResult, BoardError> {
        self.nodes = 0;
        let (best_move, score) = self.alpha_beta(board, depth, alpha, beta, player)?;
        Ok(SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        })
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        player: Player,
    ) -> Result<(Option<Column>, f64), BoardError> {
        self.nodes += 1;

        if has_line(board, player) {
            return Ok((None, player.win_score()));
        }
        if has_line(board, player.other()) {
            return Ok((None, player.other().win_score()));
        }
        if depth == 0 {
            let score = self.config.evaluator.evaluate(board, player.other(), &mut self.rng);
            return Ok((None, score));
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            // Full board without a line
            return Ok((None, 0.0));
        }

        let mut best_score = player.other().win_score();
        let mut best_move = moves.first().copied();

        for &column in &moves {
            let score = {
                let mut child = board.play_scoped(column, player)?;
                self.alpha_beta(&mut child, depth - 1, alpha, beta, player.other())?.1
            };

            if score_is_better(score, best_score, player) {
                best_score = score;
                best_move = Some(column);
            }

            match player {
                Player::A => alpha = alpha.max(best_score),
                Player::B => beta = beta.min(best_score),
            }
            if alpha >= beta {
                break;
            }
        }

        Ok((best_move, best_score))
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }
}

/// Alpha-beta with the default heuristic and a full window.
pub fn search(board: &mut Board, depth: u32, player: Player) -> Result<SearchResult, BoardError> {
    AlphaBeta::new(AlphaBetaConfig::default().with_depth(depth)).search(board, player)
}

/// Plain full-width minimax, without pruning.
///
/// Scores positions exactly like [`AlphaBeta`] does, visiting every node.
/// Useful as a reference when checking that pruning never changes a score.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    player: Player,
    evaluator: &LeafEvaluator,
    rng: &mut GameRng,
) -> Result<f64, BoardError> {
    if has_line(board, player) {
        return Ok(player.win_score());
    }
    if has_line(board, player.other()) {
        return Ok(player.other().win_score());
    }
    if depth == 0 {
        return Ok(evaluator.evaluate(board, player.other(), rng));
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Ok(0.0);
    }

    let mut best = player.other().win_score();
    for &column in &moves {
        let mut child = board.play_scoped(column, player)?;
        let score = minimax(&mut child, depth - 1, player.other(), evaluator, rng)?;
        if score_is_better(score, best, player) {
            best = score;
        }
    }
    Ok(best)
}
