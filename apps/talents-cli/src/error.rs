//! # CLI Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CLI Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                               │
//! │  │  Configuration  │  │ Character sheet │                               │
//! │  │                 │  │                 │                               │
//! │  │  InvalidConfig  │  │  SheetRead      │                               │
//! │  │  ConfigLoad     │  │  SheetParse     │                               │
//! │  │  ConfigSave     │  │                 │                               │
//! │  └─────────────────┘  └─────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Character Sheet Errors
    // =========================================================================
    #[error("Failed to read character sheet {path:?}: {reason}")]
    SheetReadFailed { path: PathBuf, reason: String },

    #[error("Character sheet {path:?} is not a valid snapshot: {reason}")]
    SheetParseFailed { path: PathBuf, reason: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::ConfigSaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::InvalidConfig("point_budget must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: point_budget must be positive"
        );

        let err = CliError::SheetReadFailed {
            path: PathBuf::from("hero.json"),
            reason: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read character sheet \"hero.json\": not found"
        );
    }

    #[test]
    fn test_toml_error_maps_to_load_failure() {
        let err: CliError = toml::from_str::<toml::Value>("[sheet").unwrap_err().into();
        assert!(matches!(err, CliError::ConfigLoadFailed(_)));
    }
}
