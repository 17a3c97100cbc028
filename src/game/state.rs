use super::{has_won, Board, MoveError, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One live game: board, player to move and outcome once decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // Player 1 starts
            outcome: None,
        }
    }

    /// Start a fresh game in place
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
        self.outcome = None;
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Winning player, `None` while running or after a draw
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's token into `column` (0-based).
    ///
    /// On success the mover is checked for four in a row, then for a full
    /// board, and the turn passes to the other player. A failed move leaves
    /// the state untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.place(column, mover)?;

        if has_won(&self.board, mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();

        Ok(row)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
