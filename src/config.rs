use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;
use crate::history::DEFAULT_CAPACITY;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub history: HistoryConfig,
    pub display: DisplayConfig,
}

/// Replay history settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Finished games kept for review; older ones are overwritten
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Characters used when printing the board.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_one_token: char,
    pub player_two_token: char,
    pub empty_token: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_one_token: 'O',
            player_two_token: 'X',
            empty_token: ' ',
        }
    }
}

impl DisplayConfig {
    /// Token printed for a player's pieces
    pub fn token(&self, player: Player) -> char {
        match player {
            Player::One => self.player_one_token,
            Player::Two => self.player_two_token,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity < 2 {
            return Err(ConfigError::Validation(
                "history.capacity must be >= 2".into(),
            ));
        }

        let d = &self.display;
        if d.player_one_token == d.player_two_token {
            return Err(ConfigError::Validation(
                "display.player_one_token and display.player_two_token must differ".into(),
            ));
        }
        if d.player_one_token == d.empty_token || d.player_two_token == d.empty_token {
            return Err(ConfigError::Validation(
                "display.empty_token must differ from both player tokens".into(),
            ));
        }
        if [d.player_one_token, d.player_two_token, d.empty_token]
            .iter()
            .any(|c| c.is_control())
        {
            return Err(ConfigError::Validation(
                "display tokens must be printable characters".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
