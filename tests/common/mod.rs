//! Shared fixtures for integration tests.

#![allow(dead_code)]

use connect4_engine::board::{is_terminal, Board, Column, COLUMN_HEIGHT};
use connect4_engine::core::Player;

/// A full board without a line for either player.
pub fn drawn_board() -> Board {
    const PAIRS: [i8; COLUMN_HEIGHT] = [1, 1, -1, -1, 1, 1];
    const ALTERNATING: [i8; COLUMN_HEIGHT] = [1, -1, 1, -1, 1, -1];
    let flipped = PAIRS.map(|m| -m);
    let columns = [PAIRS, PAIRS, flipped, PAIRS, flipped, ALTERNATING, flipped];

    let mut board = Board::new();
    for (column, markers) in columns.iter().enumerate() {
        for &marker in markers {
            let player = Player::from_marker(marker).unwrap();
            board.apply_move(column, player).unwrap();
        }
    }
    board
}

/// Play `columns` alternately from A, skipping full columns and stopping
/// once the game is over. Returns the board and the player to move.
pub fn reachable_board(columns: &[Column]) -> (Board, Player) {
    let mut board = Board::new();
    let mut player = Player::A;
    for &column in columns {
        if is_terminal(&board) {
            break;
        }
        if board.apply_move(column, player).is_ok() {
            player = player.other();
        }
    }
    (board, player)
}
