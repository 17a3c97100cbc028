use std::path::PathBuf;

use crate::game::MoveError;

/// Errors that can occur while running the text game loop.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        assert_eq!(
            GameError::InputClosed.to_string(),
            "input closed before an answer was given"
        );
        let err = GameError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(err.to_string(), "I/O error: pipe");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("history.capacity must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: history.capacity must be >= 2"
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull.to_string(), "column is full");
        assert_eq!(
            MoveError::InvalidColumn.to_string(),
            "column out of range (expected 0..7)"
        );
    }
}
