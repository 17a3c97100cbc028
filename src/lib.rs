//! # Connect Four
//!
//! Two-player Connect Four played over a line-based text interface, with a
//! bounded history of recently finished games that can be reviewed before
//! the program exits.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, state machine
//! - [`history`]: Ring buffer of finished game snapshots
//! - [`ui`]: Text rendering, input prompts and the game loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod ui;
