//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                               │
//! │     --format json                                                       │
//! │                                                                         │
//! │  2. Environment Variables                                               │
//! │     TALENTS_POINT_BUDGET=300                                            │
//! │     TALENTS_FORMAT=json                                                 │
//! │     TALENTS_LOG=debug                                                   │
//! │                                                                         │
//! │  3. TOML Config File (--config, else the platform config dir)           │
//! │     ~/.config/workshop/talents.toml (Linux)                             │
//! │     ~/Library/Application Support/com.talents.workshop/talents.toml     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                    │
//! │     250 points, text output, info logging                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # talents.toml
//! [sheet]
//! point_budget = 250
//! show_zero_lines = false
//!
//! [output]
//! format = "text"  # text | json
//!
//! [logging]
//! level = "info"
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use talents_core::DEFAULT_POINT_BUDGET;
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Output Format
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: {}. Valid: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSettings {
    /// Points available to spend on a character.
    #[serde(default = "default_point_budget")]
    pub point_budget: i32,

    /// Print breakdown sections that cost nothing.
    #[serde(default)]
    pub show_zero_lines: bool,
}

fn default_point_budget() -> i32 {
    DEFAULT_POINT_BUDGET
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            point_budget: default_point_budget(),
            show_zero_lines: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Talents Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentsConfig {
    #[serde(default)]
    pub sheet: SheetSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl TalentsConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (talents.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> CliResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CliError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CliError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CliError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Config saved");
        Ok(path)
    }

    /// Applies a command-line budget and re-validates.
    pub fn with_point_budget(mut self, point_budget: Option<i32>) -> CliResult<Self> {
        if let Some(point_budget) = point_budget {
            self.sheet.point_budget = point_budget;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.sheet.point_budget <= 0 {
            return Err(CliError::InvalidConfig(format!(
                "point_budget must be greater than 0, got {}",
                self.sheet.point_budget
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(CliError::InvalidConfig(format!(
                "Unknown log level: {}. Valid: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(budget) = lookup("TALENTS_POINT_BUDGET") {
            match budget.trim().parse::<i32>() {
                Ok(value) => {
                    debug!(point_budget = value, "Overriding point budget from environment");
                    self.sheet.point_budget = value;
                }
                Err(_) => warn!(value = %budget, "Ignoring non-numeric TALENTS_POINT_BUDGET"),
            }
        }

        if let Some(format) = lookup("TALENTS_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.output.format = parsed,
                Err(_) => warn!(format = %format, "Unknown output format in environment"),
            }
        }

        if let Some(level) = lookup("TALENTS_LOG") {
            self.logging.level = level.trim().to_lowercase();
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "talents", "workshop")
            .map(|dirs| dirs.config_dir().join("talents.toml"))
    }
}
