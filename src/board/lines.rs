//! Line detection along rows, columns and both diagonals.
//!
//! A window is a run of consecutive cells along one of four directions.
//! Line detection, the heuristic evaluator and streak counting all scan the
//! same set of windows, produced by [`windows`].

use crate::core::Player;

use super::grid::{Board, COLUMN_HEIGHT, NUM_COLUMNS};

/// Cells in a winning line.
pub const FOUR: usize = 4;

/// Direction vectors as (column step, row step).
pub const DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal rising
    (1, -1), // Diagonal falling
];

/// Every window of `len` consecutive cells, as (start column, start row,
/// direction). Each window is produced exactly once.
pub fn windows(len: usize) -> impl Iterator<Item = (usize, usize, (isize, isize))> {
    let span = len as isize - 1;
    DIRECTIONS.into_iter().flat_map(move |dir| {
        (0..NUM_COLUMNS).flat_map(move |column| {
            (0..COLUMN_HEIGHT).filter_map(move |row| {
                let end_col = column as isize + dir.0 * span;
                let end_row = row as isize + dir.1 * span;
                let in_bounds = (0..NUM_COLUMNS as isize).contains(&end_col)
                    && (0..COLUMN_HEIGHT as isize).contains(&end_row);
                in_bounds.then_some((column, row, dir))
            })
        })
    })
}

/// Raw cell values of a window.
#[inline]
pub fn window_markers(
    board: &Board,
    column: usize,
    row: usize,
    dir: (isize, isize),
    len: usize,
) -> impl Iterator<Item = i8> + '_ {
    (0..len as isize).map(move |i| {
        let c = (column as isize + dir.0 * i) as usize;
        let r = (row as isize + dir.1 * i) as usize;
        board.marker(c, r)
    })
}

/// Number of windows of `len` cells entirely held by `player`.
///
/// Overlapping runs are counted separately: five in a row holds two
/// windows of four.
#[must_use]
pub fn count_streaks(board: &Board, player: Player, len: usize) -> usize {
    let marker = player.marker();
    windows(len)
        .filter(|&(c, r, dir)| window_markers(board, c, r, dir, len).all(|m| m == marker))
        .count()
}

/// Does `player` hold four in a row anywhere on the board?
#[must_use]
pub fn has_line(board: &Board, player: Player) -> bool {
    let marker = player.marker();
    windows(FOUR).any(|(c, r, dir)| window_markers(board, c, r, dir, FOUR).all(|m| m == marker))
}

/// The player holding a line, if any. Player A is reported first.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    Player::ALL.into_iter().find(|&p| has_line(board, p))
}

/// Is the game over: a line for either player, or no legal moves left?
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    board.is_full() || winner(board).is_some()
}

/// Final result of a finished position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A player holds a line.
    Win(Player),
    /// The board is full without a line.
    Draw,
}

/// The outcome of the position, or `None` while the game continues.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        Some(Outcome::Win(player))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}
