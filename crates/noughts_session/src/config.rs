//! Session configuration from TOML and the environment.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable naming a TOML config file.
pub const CONFIG_PATH_VAR: &str = "NOUGHTS_CONFIG";
/// Environment variable overriding the random seed.
pub const SEED_VAR: &str = "NOUGHTS_SEED";
/// Environment variable overriding the log filter.
pub const LOG_VAR: &str = "NOUGHTS_LOG";

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the computer's random fallback; entropy when unset.
    seed: Option<u64>,

    /// `tracing` filter directive, e.g. `"info"` or `"noughts_tictactoe=debug"`.
    log_filter: String,

    /// Status line texts.
    messages: StatusMessages,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "info".to_string(),
            messages: StatusMessages::default(),
        }
    }
}

/// Status line shown for each phase of a round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessages {
    /// While the round is in progress.
    ongoing: String,
    /// Crosses (the human) won.
    user_won: String,
    /// Circles (the computer) won.
    computer_won: String,
    /// Nobody won.
    tie: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            ongoing: "Your move: click a cell to place an X.".to_string(),
            user_won: "You won! Yay! Click anywhere for a new game.".to_string(),
            computer_won: "I won. Better luck next time. Just click anywhere.".to_string(),
            tie: "It\u{2019}s a tie. Click anywhere for a new game.".to_string(),
        }
    }
}

impl SessionConfig {
    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Installs the global `tracing` subscriber with this config's filter.
    ///
    /// Returns `false` if a subscriber was already installed.
    pub fn init_tracing(&self) -> bool {
        crate::telemetry::init_tracing(&self.log_filter)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `.env`, then the file named by `NOUGHTS_CONFIG` (if set), then
    /// applies `NOUGHTS_SEED` and `NOUGHTS_LOG` overrides.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) against an arbitrary variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(seed) = lookup(SEED_VAR) {
            let seed = seed.trim().parse::<u64>().map_err(|e| {
                ConfigError::new(format!("{} must be an unsigned integer: {}", SEED_VAR, e))
            })?;
            config.seed = Some(seed);
        }

        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }

        debug!(seed = ?config.seed, log_filter = %config.log_filter, "Environment applied");
        Ok(config)
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
