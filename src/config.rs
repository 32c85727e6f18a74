//! Runtime configuration loaded from TOML.

use crate::players::DEFAULT_RETRY_CEILING;
use crate::render::ScreenLayout;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings shared by the self-play, play and replay commands.
///
/// ```toml
/// log_path = "data/game_result.txt"
/// retry_ceiling = 300
/// games = 10
/// seed = 7
///
/// [layout]
/// offset_x = 40
/// offset_y = 80
/// width = 400
/// height = 400
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ReversiConfig {
    /// Where completed games are appended.
    #[serde(default = "default_log_path")]
    log_path: PathBuf,

    /// Candidate evaluations the automated player may spend per turn.
    #[serde(default = "default_retry_ceiling")]
    retry_ceiling: usize,

    /// Games per self-play run.
    #[serde(default = "default_games")]
    games: usize,

    /// Seed for the automated players; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Board placement on screen.
    #[serde(default)]
    layout: ScreenLayout,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("data/game_result.txt")
}

fn default_retry_ceiling() -> usize {
    DEFAULT_RETRY_CEILING
}

fn default_games() -> usize {
    1
}

impl Default for ReversiConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            retry_ceiling: default_retry_ceiling(),
            games: default_games(),
            seed: None,
            layout: ScreenLayout::default(),
        }
    }
}

impl ReversiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.retry_ceiling == 0 {
            return Err(ConfigError::new("retry_ceiling must be at least 1".to_string()));
        }
        info!(log_path = %config.log_path.display(), games = config.games, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the log path.
    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    /// Overrides the number of self-play games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the retry ceiling.
    pub fn with_retry_ceiling(mut self, retry_ceiling: usize) -> Self {
        self.retry_ceiling = retry_ceiling;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
