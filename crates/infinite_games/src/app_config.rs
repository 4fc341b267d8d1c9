//! Binary configuration loaded from TOML.
//!
//! ```toml
//! log_file = "infinite_games.log"
//!
//! [match]
//! win_threshold = 3
//! opponent_delay_ms = 300
//! round_pause_ms = 1500
//! seed = 42
//! ```

use derive_getters::Getters;
use infinite_tictactoe::{ConfigError, MatchConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Top-level configuration for the `infinite_games` binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Match rules and pacing.
    #[serde(default, rename = "match")]
    match_config: MatchConfig,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("infinite_games.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.match_config.validate()?;

        info!(
            win_threshold = config.match_config.win_threshold(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Match settings for headless play: configured rules, no pacing.
    ///
    /// `seed` replaces the configured seed when given.
    pub fn headless_match(&self, seed: Option<u64>) -> Result<MatchConfig, ConfigError> {
        MatchConfig::new(
            *self.match_config.win_threshold(),
            0,
            0,
            seed.or(*self.match_config.seed()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_file = "custom.log"

[match]
win_threshold = 5
opponent_delay_ms = 10
round_pause_ms = 20
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("custom.log"));
        assert_eq!(*config.match_config().win_threshold(), 5);
        assert_eq!(*config.match_config().opponent_delay_ms(), 10);
        assert_eq!(*config.match_config().seed(), Some(7));
    }

    #[test]
    fn test_partial_match_table_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[match]\nwin_threshold = 2").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.match_config().win_threshold(), 2);
        assert_eq!(*config.match_config().round_pause_ms(), 1500);
        assert_eq!(config.log_file(), &PathBuf::from("infinite_games.log"));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[match]\nwin_threshold = 0").unwrap();
        assert!(AppConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../infinite_games.toml");
        let config = AppConfig::from_file(path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_headless_match_overrides_seed() {
        let config = AppConfig::default();
        let headless = config.headless_match(Some(11)).unwrap();
        assert_eq!(*headless.opponent_delay_ms(), 0);
        assert_eq!(*headless.round_pause_ms(), 0);
        assert_eq!(*headless.seed(), Some(11));
        assert_eq!(*headless.win_threshold(), 3);
    }
}
