//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timetravel_tictactoe::BoardSize;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Board size for the first game (3, 4 or 5).
    #[serde(default)]
    board_size: BoardSize,

    /// File the interactive UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = %config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from a file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies a board size given on the command line.
    #[instrument(skip(self))]
    pub fn with_size_override(self, size: Option<u8>) -> Result<Self, ConfigError> {
        match size {
            None => Ok(self),
            Some(side) => {
                let size = BoardSize::try_from(usize::from(side))
                    .map_err(|e| ConfigError::new(e.kind().to_string()))?;
                Ok(self.with_board_size(size))
            }
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = AppConfig::from_toml(
            "board_size = 5\nlog_file = \"game.log\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(*config.board_size(), BoardSize::Five);
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_unsupported_size_rejected() {
        let err = AppConfig::from_toml("board_size = 7\n").unwrap_err();
        assert!(err.message.contains("Unsupported board size 7"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AppConfig::from_toml("colour = \"red\"\n").is_err());
    }

    #[test]
    fn test_size_override() {
        let config = AppConfig::default().with_size_override(Some(4)).unwrap();
        assert_eq!(*config.board_size(), BoardSize::Four);

        let unchanged = AppConfig::default().with_size_override(None).unwrap();
        assert_eq!(unchanged, AppConfig::default());

        assert!(AppConfig::default().with_size_override(Some(9)).is_err());
    }
}
