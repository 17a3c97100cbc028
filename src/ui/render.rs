use std::fmt::Write;

use crate::config::DisplayConfig;
use crate::game::{Board, Cell, COLS, ROWS};
use crate::history::HistoryEntry;

fn cell_char(cell: Cell, display: &DisplayConfig) -> char {
    match cell.owner() {
        Some(player) => display.token(player),
        None => display.empty_token,
    }
}

/// Render the board as a fixed-width text grid, top row first, with the
/// 1-based column labels underneath.
pub fn board_to_string(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::new();

    for row in (0..ROWS).rev() {
        out.push('\t');
        for col in 0..COLS {
            out.push('|');
            out.push(cell_char(board.get(row, col), display));
        }
        out.push_str("|\n");
    }

    out.push('\t');
    for _ in 0..COLS {
        out.push_str("-*");
    }
    out.push_str("-\n");

    out.push('\t');
    for col in 0..COLS {
        let _ = write!(out, "-{}", col + 1);
    }
    out.push_str("-\n");

    out
}

/// A finished game: its final board and who won it.
pub fn history_entry_to_string(entry: &HistoryEntry, display: &DisplayConfig) -> String {
    let mut out = board_to_string(&entry.board, display);
    let _ = match entry.winner {
        Some(player) => writeln!(
            out,
            "Game {}: ({} won this game)",
            entry.game_number,
            player.name()
        ),
        None => writeln!(out, "Game {}: (no winner)", entry.game_number),
    };
    out
}
