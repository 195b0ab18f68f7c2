//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LoggerSettings, PaginationConfig, ServerConfig, Settings};
use crate::pagination::is_local_route;

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host cannot be empty.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl PaginationConfig {
    /// Validate pagination defaults
    ///
    /// # Validation Rules
    /// - Default page size must be at least 1
    /// - Default page size must not exceed the maximum page size
    /// - Item type label and page query key must not be empty
    /// - Base path must start with '/'
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_items_per_page == 0 {
            return Err(ConfigError::validation(
                "pagination.default_items_per_page",
                "Default items per page must be at least 1.",
            ));
        }

        if self.default_items_per_page > self.max_items_per_page {
            return Err(ConfigError::ValidationError {
                field: "pagination.default_items_per_page".to_string(),
                message: format!(
                    "Default items per page ({}) cannot exceed max items per page ({}).",
                    self.default_items_per_page, self.max_items_per_page
                ),
            });
        }

        if self.default_item_type_label.trim().is_empty() {
            return Err(ConfigError::validation(
                "pagination.default_item_type_label",
                "Item type label cannot be empty.",
            ));
        }

        if self.page_query_key.trim().is_empty() {
            return Err(ConfigError::validation(
                "pagination.page_query_key",
                "Page query key cannot be empty.",
            ));
        }

        if !is_local_route(&self.base_path) {
            return Err(ConfigError::ValidationError {
                field: "pagination.base_path".to_string(),
                message: format!(
                    "Base path must start with a single '/', got '{}'.",
                    self.base_path
                ),
            });
        }

        Ok(())
    }
}

impl FileSettings {
    /// Validate file logging settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let format = self.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "Log file path cannot be empty when file output is enabled.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - At least one output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate every configuration section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logger.validate()?;
        self.pagination.validate()?;
        Ok(())
    }
}
