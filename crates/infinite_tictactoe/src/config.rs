//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Tunables for a match.
///
/// The delays are presentation pacing only; the core never sleeps and is
/// correct with both set to zero.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Round wins needed to take the match.
    win_threshold: u32,

    /// Pause before the opponent answers a move, in milliseconds.
    opponent_delay_ms: u64,

    /// Pause between a won round and the next one, in milliseconds.
    round_pause_ms: u64,

    /// Seed for the opponent's random tie-breaks; entropy when absent.
    seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            win_threshold: 3,
            opponent_delay_ms: 300,
            round_pause_ms: 1500,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Creates a configuration and validates it.
    #[instrument]
    pub fn new(
        win_threshold: u32,
        opponent_delay_ms: u64,
        round_pause_ms: u64,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            win_threshold,
            opponent_delay_ms,
            round_pause_ms,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Defaults with zero delays, for headless play and tests.
    pub fn headless() -> Self {
        Self {
            opponent_delay_ms: 0,
            round_pause_ms: 0,
            ..Self::default()
        }
    }

    /// Returns a copy with the given seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_threshold == 0 {
            return Err(ConfigError::new("win_threshold must be at least 1"));
        }
        Ok(())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
