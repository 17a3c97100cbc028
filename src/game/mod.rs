//! Core Connect Four game logic: board with column heights, players,
//! four-in-a-row detection and the turn/outcome state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{has_won, winner};
