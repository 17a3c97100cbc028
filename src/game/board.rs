use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column out of range (expected 0..{COLS})")]
    InvalidColumn,

    #[error("game is already over")]
    GameOver,
}

/// Fixed-size grid plus per-column fill heights.
///
/// Row 0 is the bottom. For every column `c`, `heights[c]` is the number of
/// tokens in that column and every cell at or above it is [`Cell::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Clear every cell and column height
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < ROWS && col < COLS,
            "cell ({row}, {col}) out of range for a {ROWS}x{COLS} board"
        );
        self.cells[row][col]
    }

    /// Number of tokens in a column
    pub fn height(&self, col: usize) -> usize {
        assert!(col < COLS, "column {col} out of range for a {COLS}-column board");
        self.heights[col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.heights[col] == ROWS
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn place(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.heights[col];
        if row == ROWS {
            return Err(MoveError::ColumnFull);
        }

        self.cells[row][col] = player.to_cell();
        self.heights[col] += 1;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == ROWS)
    }

    /// Total number of tokens on the board
    pub fn token_count(&self) -> usize {
        self.heights.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
