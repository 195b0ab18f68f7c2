//! Configuration settings structures for grants-pager
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};
use crate::pagination::{DEFAULT_ITEM_TYPE_LABEL, DEFAULT_PAGE_QUERY_KEY};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "grants-pager".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_items_per_page() -> u64 {
    10
}

fn default_max_items_per_page() -> u64 {
    100
}

fn default_item_type_label() -> String {
    DEFAULT_ITEM_TYPE_LABEL.to_string()
}

fn default_page_query_key() -> String {
    DEFAULT_PAGE_QUERY_KEY.to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// ============================================================================
// Pagination Configuration
// ============================================================================

/// Defaults and limits applied to pagination requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a request does not specify one
    #[serde(default = "default_items_per_page")]
    pub default_items_per_page: u64,

    /// Largest page size a request may ask for
    #[serde(default = "default_max_items_per_page")]
    pub max_items_per_page: u64,

    /// Noun used in the summary sentence ("Showing 1 to 10 of 31 items")
    #[serde(default = "default_item_type_label")]
    pub default_item_type_label: String,

    /// Query key the page number is written to in generated links
    #[serde(default = "default_page_query_key")]
    pub page_query_key: String,

    /// Route used for generated links when the request names none
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: default_items_per_page(),
            max_items_per_page: default_max_items_per_page(),
            default_item_type_label: default_item_type_label(),
            page_query_key: default_page_query_key(),
            base_path: default_base_path(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = self.console.into_console_config();
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, &self.level).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl ConsoleSettings {
    /// Convert ConsoleSettings to ConsoleConfig
    pub fn into_console_config(self) -> ConsoleConfig {
        ConsoleConfig::new(self.enabled, self.colored)
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self.parse_format()?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(
            |e| ConfigError::ValidationError {
                field: "logger.file".to_string(),
                message: e.to_string(),
            },
        )
    }

    /// Parse the format string into LogFormat enum
    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Pagination defaults and limits
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop_oneof![
                Just("127.0.0.1".to_string()),
                Just("0.0.0.0".to_string()),
                Just("localhost".to_string()),
            ],
            1u16..=65535u16,
            1u64..=300u64,
        )
            .prop_map(|(host, port, request_timeout)| ServerConfig {
                host,
                port,
                request_timeout,
            })
    }

    fn arb_pagination_config() -> impl Strategy<Value = PaginationConfig> {
        (
            1u64..=50u64,
            50u64..=500u64,
            prop_oneof![
                Just("items".to_string()),
                Just("applications".to_string()),
                Just("schemes".to_string()),
            ],
            prop_oneof![Just("page".to_string()), Just("p".to_string())],
            "/[a-z]{0,12}",
        )
            .prop_map(
                |(default_items_per_page, max_items_per_page, label, key, base_path)| {
                    PaginationConfig {
                        default_items_per_page,
                        max_items_per_page,
                        default_item_type_label: label,
                        page_query_key: key,
                        base_path,
                    }
                },
            )
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop_oneof![
                Just("trace".to_string()),
                Just("debug".to_string()),
                Just("info".to_string()),
                Just("warn".to_string()),
                Just("error".to_string()),
            ],
            (any::<bool>(), any::<bool>()),
            (
                any::<bool>(),
                any::<bool>(),
                prop_oneof![
                    Just("json".to_string()),
                    Just("full".to_string()),
                    Just("compact".to_string()),
                ],
            ),
        )
            .prop_map(
                |(level, (enabled, colored), (file_enabled, append, format))| LoggerSettings {
                    level,
                    console: ConsoleSettings { enabled, colored },
                    file: FileSettings {
                        enabled: file_enabled,
                        path: "logs/test.log".to_string(),
                        append,
                        format,
                    },
                },
            )
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            arb_server_config(),
            arb_logger_settings(),
            arb_pagination_config(),
        )
            .prop_map(|(server, logger, pagination)| Settings {
                application: ApplicationConfig::default(),
                server,
                logger,
                pagination,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_settings_round_trip_serialization(settings in arb_settings()) {
            let toml_str = toml::to_string(&settings)
                .expect("Settings should serialize to TOML");
            let deserialized: Settings = toml::from_str(&toml_str)
                .expect("TOML should deserialize back to Settings");
            prop_assert_eq!(settings, deserialized);
        }
    }

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "grants-pager");
        assert_eq!(config.version, crate::pkg_version());
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_pagination_config_defaults() {
        let config = PaginationConfig::default();
        assert_eq!(config.default_items_per_page, 10);
        assert_eq!(config.max_items_per_page, 100);
        assert_eq!(config.default_item_type_label, "items");
        assert_eq!(config.page_query_key, "page");
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml_str = r#"
            [server]
            port = 8080

            [pagination]
            default_items_per_page = 25
            default_item_type_label = "applications"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.pagination.default_items_per_page, 25);
        assert_eq!(settings.pagination.max_items_per_page, 100);
        assert_eq!(settings.pagination.default_item_type_label, "applications");
        assert_eq!(settings.logger, LoggerSettings::default());
    }

    #[test]
    fn test_logger_settings_into_logger_config() {
        let config = LoggerSettings::default().into_logger_config().unwrap();
        assert_eq!(config.level, tracing::Level::INFO);
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
        assert_eq!(config.file.format, LogFormat::Json);
    }

    #[test]
    fn test_logger_settings_invalid_format() {
        let mut settings = LoggerSettings::default();
        settings.file.format = "xml".to_string();
        let result = settings.into_logger_config();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "logger.file.format"
        ));
    }

    #[test]
    fn test_logger_settings_both_disabled() {
        let mut settings = LoggerSettings::default();
        settings.console.enabled = false;
        settings.file.enabled = false;
        assert!(settings.into_logger_config().is_err());
    }
}
