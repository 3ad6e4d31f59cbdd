//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::controller::SavePolicy;
use crate::persistence::DEFAULT_SAVE_KEY;

/// Settings for the terminal host.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HotseatConfig {
    /// SQLite file holding saved games.
    db_path: String,

    /// Key the game is saved under.
    save_key: String,

    /// When to save.
    save_policy: SavePolicy,

    /// File that receives log output.
    log_file: PathBuf,
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            db_path: "hotseat_tictactoe.db".to_string(),
            save_key: DEFAULT_SAVE_KEY.to_string(),
            save_policy: SavePolicy::default(),
            log_file: PathBuf::from("hotseat_tictactoe.log"),
        }
    }
}

impl HotseatConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for invalid TOML or an empty save key.
    #[instrument(skip(content), fields(bytes = content.len()))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.save_key.trim().is_empty() {
            return Err(ConfigError::new("save_key must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(db_path = %config.db_path, policy = ?config.save_policy, "Config loaded");
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the database path, e.g. from a command-line override.
    pub fn with_db_path(mut self, db_path: impl Into<String>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
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
        let config = HotseatConfig::from_toml("").unwrap();
        assert_eq!(config, HotseatConfig::default());
        assert_eq!(config.save_key(), "TicTacToeGame");
        assert_eq!(*config.save_policy(), SavePolicy::AfterEveryMove);
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = HotseatConfig::from_toml(
            "db_path = \"games.db\"\nsave_policy = \"manual\"\n",
        )
        .unwrap();
        assert_eq!(config.db_path(), "games.db");
        assert_eq!(*config.save_policy(), SavePolicy::Manual);
        assert_eq!(config.save_key(), DEFAULT_SAVE_KEY);
    }

    #[test]
    fn test_rejects_empty_key_and_bad_policy() {
        assert!(HotseatConfig::from_toml("save_key = \"  \"").is_err());
        assert!(HotseatConfig::from_toml("save_policy = \"sometimes\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = HotseatConfig::load_or_default("/nonexistent/hotseat.toml").unwrap();
        assert_eq!(config, HotseatConfig::default());
    }
}
