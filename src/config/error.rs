//! Errors raised while loading or validating [`Settings`](super::Settings)

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` or `PAGER_CONFIG_FILE` points at nothing
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Sources merged but did not deserialize into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Dotted path of the offending setting, e.g. `pagination.base_path`
        field: String,
        message: String,
    },

    /// `PAGER_APP_ENV` holds an unknown environment name
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// `PAGER_CONFIG_DIR` and `PAGER_CONFIG_FILE` were both set
    #[error("Mutual exclusivity error: {0}")]
    MutualExclusivityError(String),

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity<S: Into<String>>(message: S) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }

    /// Setting or source the error is about, reported as the error key
    pub fn key(&self) -> &str {
        match self {
            ConfigError::ValidationError { field, .. } => field,
            ConfigError::FileNotFound(_) => "config_file",
            ConfigError::MutualExclusivityError(_) => "config_source",
            ConfigError::EnvVarError(_) => "environment",
            ConfigError::ParseError(_) | ConfigError::Other(_) => "configuration",
        }
    }
}
