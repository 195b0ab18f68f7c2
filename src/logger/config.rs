//! Runtime logger configuration
//!
//! Built from [`LoggerSettings`](crate::config::LoggerSettings) once the
//! settings are loaded; every value here is already parsed and checked.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// Main logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    /// Used when `RUST_LOG` is not set
    pub level: Level,
}

impl LoggerConfig {
    /// Parse `level` and check that the outputs make sense together
    pub fn new(console: ConsoleConfig, file: FileConfig, level: &str) -> Result<Self, LoggerError> {
        let config = Self {
            console,
            file,
            level: parse_level(level)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LoggerError> {
        if !self.console.enabled && !self.file.enabled {
            return Err(LoggerError::config(
                "At least one output (console or file) must be enabled",
            ));
        }
        self.file.validate()
    }

    /// `RUST_LOG` when it holds a valid directive, the configured level otherwise
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| self.level_filter())
    }

    fn level_filter(&self) -> EnvFilter {
        EnvFilter::new(self.level.as_str().to_ascii_lowercase())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
            level: Level::INFO,
        }
    }
}

/// Case-insensitive; `warning` is accepted for `warn`
pub fn parse_level(level: &str) -> Result<Level, LoggerError> {
    let normalized = match level.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        other => other.to_string(),
    };
    Level::from_str(&normalized).map_err(|_| {
        LoggerError::config(format!(
            "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
            level
        ))
    })
}

/// Console output, always written to stderr so stdout stays free for
/// command output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// ANSI colors, applied only when stderr is a terminal
    pub colored: bool,
}

impl ConsoleConfig {
    pub fn new(enabled: bool, colored: bool) -> Self {
        Self { enabled, colored }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub enabled: bool,
    pub path: PathBuf,
    /// Truncate on startup when false
    pub append: bool,
    pub format: LogFormat,
}

impl FileConfig {
    pub fn new(
        enabled: bool,
        path: PathBuf,
        append: bool,
        format: LogFormat,
    ) -> Result<Self, LoggerError> {
        let config = Self {
            enabled,
            path,
            append,
            format,
        };
        config.validate()?;
        Ok(config)
    }

    /// Does not touch the filesystem; the writer creates parent directories.
    pub fn validate(&self) -> Result<(), LoggerError> {
        if self.enabled && self.path.as_os_str().is_empty() {
            return Err(LoggerError::config(
                "File path cannot be empty when file output is enabled",
            ));
        }
        Ok(())
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/app.log"),
            append: true,
            format: LogFormat::Json,
        }
    }
}

/// Line format of the file output
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl LogFormat {
    pub const ALL: [LogFormat; 3] = [LogFormat::Full, LogFormat::Compact, LogFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| {
                LoggerError::format(format!(
                    "Invalid log format '{}'. Valid formats are: full, compact, json",
                    s
                ))
            })
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LoggerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.level, Level::INFO);
        assert!(!config.file.enabled);
    }

    #[test]
    fn test_new_parses_level() {
        let config = LoggerConfig::new(ConsoleConfig::default(), FileConfig::default(), "DEBUG")
            .unwrap();
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_warning_alias() {
        assert_eq!(parse_level("warning").unwrap(), Level::WARN);
        assert_eq!(parse_level(" Warn ").unwrap(), Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = parse_level("verbose").unwrap_err();
        assert!(matches!(err, LoggerError::Config { .. }));
        assert!(err.to_string().contains("'verbose'"));
    }

    #[test]
    fn test_both_outputs_disabled() {
        let result = LoggerConfig::new(ConsoleConfig::new(false, false), FileConfig::default(), "info");
        assert!(matches!(result, Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_file_enabled_requires_path() {
        let result = FileConfig::new(true, PathBuf::new(), true, LogFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_level_filter_directive() {
        let config = LoggerConfig {
            level: Level::TRACE,
            ..Default::default()
        };
        assert_eq!(
            config.level_filter().max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);

        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, LoggerError::Format { .. }));
        assert!(err.to_string().contains("'xml'"));
    }

    #[test]
    fn test_log_format_display_matches_parse() {
        for format in LogFormat::ALL {
            assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
        }
    }

    proptest! {
        #[test]
        fn prop_valid_when_any_output_enabled(
            console_enabled in any::<bool>(),
            file_enabled in any::<bool>(),
            level in prop::sample::select(vec!["trace", "debug", "info", "warn", "error"]),
        ) {
            prop_assume!(console_enabled || file_enabled);

            let file = FileConfig {
                enabled: file_enabled,
                path: PathBuf::from("test.log"),
                ..Default::default()
            };
            let config = LoggerConfig::new(ConsoleConfig::new(console_enabled, false), file, level);
            prop_assert!(config.is_ok());
        }
    }
}
