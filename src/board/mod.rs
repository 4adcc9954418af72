//! Board and rules: state, move legality, apply/undo, line detection.
//!
//! Everything else in the crate is built on these operations. The board is
//! a small `Copy` value, so MCTS nodes snapshot it freely while alpha-beta
//! mutates a single instance in place.

pub mod grid;
pub mod lines;

pub use grid::{Board, Column, Moves, ScopedMove, BOARD_CELLS, COLUMN_HEIGHT, NUM_COLUMNS};
pub use lines::{count_streaks, has_line, is_terminal, outcome, winner, Outcome, FOUR};

#[cfg(test)]
pub(crate) mod testing;
