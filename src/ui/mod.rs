//! Line-based text interface: board rendering, validated prompts and the
//! game loop that ties them to the core.

mod app;
pub mod prompt;
pub mod render;

pub use app::App;
