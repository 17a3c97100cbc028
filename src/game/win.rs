//! Four-in-a-row detection.
//!
//! The check is a pure function of the board and a player: it scans every
//! row, every column and both diagonal orientations for a run of
//! [`WIN_LENGTH`] tokens owned by that player.

use super::{Board, Cell, Player, COLS, ROWS};

/// Number of consecutive tokens needed to win
pub const WIN_LENGTH: usize = 4;

/// Check whether `player` has four consecutive tokens anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    check_horizontal(board, player)
        || check_vertical(board, player)
        || check_diagonal_rising(board, player)
        || check_diagonal_falling(board, player)
}

/// The player with four in a row, if any. Player One is checked first.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|&player| has_won(board, player))
}

/// Run-length scan along each row, left to right
fn check_horizontal(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    for row in 0..ROWS {
        let mut count = 0;
        for col in 0..COLS {
            if board.get(row, col) == cell {
                count += 1;
                if count == WIN_LENGTH {
                    return true;
                }
            } else {
                count = 0;
            }
        }
    }
    false
}

/// Run-length scan up each column
fn check_vertical(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    for col in 0..COLS {
        let mut count = 0;
        for row in 0..ROWS {
            if board.get(row, col) == cell {
                count += 1;
                if count == WIN_LENGTH {
                    return true;
                }
            } else {
                count = 0;
            }
        }
    }
    false
}

/// Diagonal where the row increases with the column (/)
fn check_diagonal_rising(board: &Board, player: Player) -> bool {
    any_diagonal_run(board, player, 1)
}

/// Diagonal where the row increases as the column decreases (\)
fn check_diagonal_falling(board: &Board, player: Player) -> bool {
    any_diagonal_run(board, player, -1)
}

/// Walk upward from every cell owned by `player`, stepping `col_step`
/// columns per row.
fn any_diagonal_run(board: &Board, player: Player, col_step: isize) -> bool {
    let cell = player.to_cell();
    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) == cell && walk_diagonal(board, cell, row, col, col_step) {
                return true;
            }
        }
    }
    false
}

fn walk_diagonal(board: &Board, cell: Cell, row: usize, col: usize, col_step: isize) -> bool {
    let mut count = 0;
    let mut r = row;
    let mut c = col as isize;

    // Both column bounds are checked whichever way the walk leans
    while r < ROWS && c >= 0 && c < COLS as isize {
        if board.get(r, c as usize) != cell {
            return false;
        }
        count += 1;
        if count == WIN_LENGTH {
            return true;
        }
        r += 1;
        c += col_step;
    }
    false
}
