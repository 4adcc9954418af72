//! The Connect Four grid: move legality, apply/undo and rendering.
//!
//! Cells are stored column-major with row 0 at the bottom:
//! ```text
//! row 5  . . . . . . .   <- top
//! row 4  . . . . . . .
//! ...
//! row 0  . . . . . . .   <- bottom
//!        0 1 2 3 4 5 6
//! ```
//!
//! Gravity invariant: within a column, occupied cells are contiguous from
//! row 0. `heights` caches the number of markers per column so apply and
//! undo are O(1).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardError, Player};

/// Number of columns on the board.
pub const NUM_COLUMNS: usize = 7;

/// Number of rows in each column.
pub const COLUMN_HEIGHT: usize = 6;

/// Total number of cells.
pub const BOARD_CELLS: usize = NUM_COLUMNS * COLUMN_HEIGHT;

/// A move is the index of the column a marker is dropped into.
pub type Column = usize;

/// Legal moves in ascending column order.
///
/// SmallVec keeps the at-most-seven entries on the stack.
pub type Moves = SmallVec<[Column; NUM_COLUMNS]>;

/// A Connect Four position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// `cells[column][row]`: 0 empty, +1 player A, -1 player B.
    cells: [[i8; COLUMN_HEIGHT]; NUM_COLUMNS],
    /// Markers per column.
    heights: [u8; NUM_COLUMNS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[0; COLUMN_HEIGHT]; NUM_COLUMNS],
            heights: [0; NUM_COLUMNS],
        }
    }

    /// Build a board by playing `columns` in order, alternating from `first`.
    ///
    /// ```
    /// use connect4_engine::board::Board;
    /// use connect4_engine::core::Player;
    ///
    /// let board = Board::from_moves(&[3, 3, 4], Player::A).unwrap();
    /// assert_eq!(board.cell(3, 0), Some(Player::A));
    /// assert_eq!(board.cell(3, 1), Some(Player::B));
    /// assert_eq!(board.cell(4, 0), Some(Player::A));
    /// ```
    pub fn from_moves(columns: &[Column], first: Player) -> Result<Self, BoardError> {
        let mut board = Self::new();
        let mut player = first;
        for &column in columns {
            board.apply_move(column, player)?;
            player = player.other();
        }
        Ok(board)
    }

    /// Raw cell value at (column, row). Out-of-range cells read as empty.
    #[inline]
    #[must_use]
    pub fn marker(&self, column: Column, row: usize) -> i8 {
        if column < NUM_COLUMNS && row < COLUMN_HEIGHT {
            self.cells[column][row]
        } else {
            0
        }
    }

    /// Owner of the cell at (column, row), if any.
    #[inline]
    #[must_use]
    pub fn cell(&self, column: Column, row: usize) -> Option<Player> {
        Player::from_marker(self.marker(column, row))
    }

    /// Number of markers in a column.
    #[inline]
    #[must_use]
    pub fn height(&self, column: Column) -> usize {
        self.heights.get(column).map_or(0, |&h| h as usize)
    }

    /// Total number of markers on the board.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.heights.iter().map(|&h| h as usize).sum()
    }

    /// Is the move legal (column in range with an empty top row)?
    #[inline]
    #[must_use]
    pub fn is_legal(&self, column: Column) -> bool {
        column < NUM_COLUMNS && self.cells[column][COLUMN_HEIGHT - 1] == 0
    }

    /// Columns whose top row is empty, in ascending order.
    ///
    /// Both searches enumerate moves in this order, and the first entry is
    /// the fallback move whenever one is needed.
    #[must_use]
    pub fn legal_moves(&self) -> Moves {
        (0..NUM_COLUMNS).filter(|&c| self.is_legal(c)).collect()
    }

    /// Is the board full?
    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..NUM_COLUMNS).all(|c| !self.is_legal(c))
    }

    /// Drop `player`'s marker into the lowest empty row of `column`.
    ///
    /// Returns the row the marker landed in. A full or out-of-range column
    /// is an [`BoardError::InvalidMove`] and leaves the board untouched.
    pub fn apply_move(&mut self, column: Column, player: Player) -> Result<usize, BoardError> {
        if !self.is_legal(column) {
            return Err(BoardError::InvalidMove { column });
        }
        let row = self.heights[column] as usize;
        self.cells[column][row] = player.marker();
        self.heights[column] += 1;
        Ok(row)
    }

    /// Remove the topmost marker of `column`.
    ///
    /// No history is kept: callers must only undo the move they just made
    /// in this column. An empty column is an [`BoardError::EmptyColumn`].
    pub fn undo_move(&mut self, column: Column) -> Result<(), BoardError> {
        if column >= NUM_COLUMNS || self.heights[column] == 0 {
            return Err(BoardError::EmptyColumn { column });
        }
        self.heights[column] -= 1;
        self.cells[column][self.heights[column] as usize] = 0;
        Ok(())
    }

    /// Apply a move that is taken back when the returned guard drops.
    ///
    /// This is the apply/undo pairing alpha-beta relies on: the guard lives
    /// in the same stack frame as the recursive call, so the board is
    /// restored on every exit path.
    pub fn play_scoped(
        &mut self,
        column: Column,
        player: Player,
    ) -> Result<ScopedMove<'_>, BoardError> {
        self.apply_move(column, player)?;
        Ok(ScopedMove { board: self, column })
    }

    /// The board with `column` played by `player`, leaving `self` untouched.
    pub fn with_move(&self, column: Column, player: Player) -> Result<Self, BoardError> {
        let mut next = *self;
        next.apply_move(column, player)?;
        Ok(next)
    }
}

/// A move applied for the lifetime of the guard.
///
/// Derefs to the board so the caller can keep searching below it.
#[derive(Debug)]
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    column: Column,
}

impl ScopedMove<'_> {
    /// The column this guard played.
    #[must_use]
    pub fn column(&self) -> Column {
        self.column
    }
}

impl std::ops::Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl std::ops::DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        // The column holds at least the marker this guard placed.
        let undone = self.board.undo_move(self.column);
        debug_assert!(undone.is_ok(), "scoped move lost its marker");
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..COLUMN_HEIGHT).rev() {
            for column in 0..NUM_COLUMNS {
                if column > 0 {
                    write!(f, " ")?;
                }
                let symbol = self.cell(column, row).map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        for column in 0..NUM_COLUMNS {
            if column > 0 {
                write!(f, " ")?;
            }
            write!(f, "{column}")?;
        }
        writeln!(f)
    }
}
