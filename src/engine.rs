//! Engine-vs-engine play.
//!
//! An [`Engine`] runs one side's configured strategy and picks its moves.
//! [`play_game`] alternates two engines from the empty board until the game
//! is decided.

use log::{debug, info};

use crate::board::{outcome, Board, Column, Outcome};
use crate::core::{BoardError, EngineConfig, GameRng, Player, Strategy};
use crate::mcts::MCTSSearch;
use crate::search::AlphaBeta;

/// Picks moves for one side with a fixed strategy.
///
/// Every decision runs a fresh search on a stream forked from the engine's
/// RNG, so a game replays exactly from the same seed.
pub struct Engine {
    strategy: Strategy,
    rng: GameRng,
}

impl Engine {
    /// Create an engine drawing randomness from `rng`.
    pub fn new(strategy: Strategy, rng: GameRng) -> Self {
        Self { strategy, rng }
    }

    /// Choose a column for `player` on `board`.
    ///
    /// Returns `None` only when the game is already over. A search that
    /// does not name a move (alpha-beta at depth 0) falls back to the
    /// first legal column.
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Result<Option<Column>, BoardError> {
        if outcome(board).is_some() {
            return Ok(None);
        }

        let column = match &self.strategy {
            Strategy::AlphaBeta(config) => {
                let mut scratch = *board;
                AlphaBeta::new(*config)
                    .with_rng(self.rng.fork())
                    .search(&mut scratch, player)?
                    .best_move
            }
            Strategy::Mcts(config) => {
                MCTSSearch::with_rng(*board, player, config.clone(), self.rng.fork()).search()?
            }
        };

        Ok(column.or_else(|| board.legal_moves().first().copied()))
    }

    /// The strategy this engine plays.
    #[must_use]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

/// A finished game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Columns played, in order, starting with player A.
    pub moves: Vec<Column>,
    /// The final position.
    pub board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Play one game between the two configured strategies.
///
/// `on_move` is called after every move with the new board, the player who
/// moved and the column played.
pub fn play_game(
    config: &EngineConfig,
    mut on_move: impl FnMut(&Board, Player, Column),
) -> Result<GameRecord, BoardError> {
    let mut rng = GameRng::new(config.seed);
    let mut engine_a = Engine::new(config.player_a.clone(), rng.fork());
    let mut engine_b = Engine::new(config.player_b.clone(), rng.fork());

    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut player = Player::A;

    while outcome(&board).is_none() {
        let engine = match player {
            Player::A => &mut engine_a,
            Player::B => &mut engine_b,
        };
        let Some(column) = engine.choose_move(&board, player)? else {
            break;
        };

        board.apply_move(column, player)?;
        moves.push(column);
        debug!("{} plays column {}", player, column);
        on_move(&board, player, column);

        player = player.other();
    }

    // choose_move only declines on a finished board
    let result = outcome(&board).unwrap_or(Outcome::Draw);
    info!("game over after {} moves: {:?}", moves.len(), result);

    Ok(GameRecord {
        moves,
        board,
        outcome: result,
    })
}
