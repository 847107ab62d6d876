//! Front-end configuration.
//!
//! Built-in defaults, overridden by an optional TOML file, overridden
//! by command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Input poll and animation tick, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// File that receives log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Whether a win shows confetti.
    #[serde(default = "default_confetti")]
    confetti: bool,

    /// Number of confetti particles.
    #[serde(default = "default_confetti_particles")]
    confetti_particles: usize,

    /// Ticks a tapped cell or button stays highlighted.
    #[serde(default = "default_press_flash_ticks")]
    press_flash_ticks: u16,

    /// Ticks the winner banner takes to grow to full size.
    #[serde(default = "default_banner_ticks")]
    banner_ticks: u16,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

fn default_confetti() -> bool {
    true
}

fn default_confetti_particles() -> usize {
    80
}

fn default_press_flash_ticks() -> u16 {
    4
}

fn default_banner_ticks() -> u16 {
    10
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
            confetti: default_confetti(),
            confetti_particles: default_confetti_particles(),
            press_flash_ticks: default_press_flash_ticks(),
            banner_ticks: default_banner_ticks(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than zero".to_string()));
        }

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit config file, or the default one if present,
    /// or falls back to defaults.
    ///
    /// An explicit path that does not exist is an error.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(ms) = cli.tick_rate_ms {
            self.tick_rate_ms = ms;
        }
        if cli.no_confetti {
            self.confetti = false;
        }
        self
    }

    /// Tick interval as a duration.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
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
