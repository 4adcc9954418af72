//! Random playouts.
//!
//! A rollout plays uniformly random legal moves until someone completes a
//! line or the board fills up. It serves as a noisy leaf evaluator for
//! alpha-beta and as the MCTS simulation step.

use log::trace;

use crate::board::{has_line, winner, Board};
use crate::core::{GameRng, Player};

/// Play one random game out from `board`.
///
/// `last_mover` is the player whose move produced `board`; its opponent
/// moves first. Returns the winner, or `None` for a draw. The caller's
/// board is never touched.
///
/// A board that already holds a line is finished: its owner is returned
/// without playing further.
pub fn rollout(board: &Board, last_mover: Player, rng: &mut GameRng) -> Option<Player> {
    if let Some(already) = winner(board) {
        return Some(already);
    }

    let mut board = *board;
    let mut mover = last_mover.other();

    loop {
        let moves = board.legal_moves();
        let Some(&column) = rng.choose(&moves) else {
            return None;
        };
        if board.apply_move(column, mover).is_err() {
            // legal_moves only yields playable columns
            return None;
        }
        if has_line(&board, mover) {
            return Some(mover);
        }
        mover = mover.other();
    }
}

/// Average outcome of `samples` rollouts, in `[-1, 1]`.
///
/// Wins for A count +1, wins for B -1, draws 0. Zero samples gives 0.
pub fn estimate(board: &Board, last_mover: Player, samples: u32, rng: &mut GameRng) -> f64 {
    if samples == 0 {
        return 0.0;
    }

    let tally: i64 = (0..samples)
        .map(|_| match rollout(board, last_mover, rng) {
            Some(Player::A) => 1,
            Some(Player::B) => -1,
            None => 0,
        })
        .sum();

    let score = tally as f64 / f64::from(samples);
    trace!("estimate over {samples} rollouts: {score:.3}");
    score
}
