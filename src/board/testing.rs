//! Board fixtures shared by unit tests.

use super::{Board, COLUMN_HEIGHT};
use crate::core::Player;

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
