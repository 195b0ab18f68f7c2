//! Configuration loader for grants-pager
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "PAGER_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "PAGER_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PAGER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base configuration (optional, serde defaults fill gaps)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `PAGER_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader from the process environment
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`PAGER_CONFIG_DIR`)
    /// - Specific configuration file (`PAGER_CONFIG_FILE`)
    /// - Application environment (`PAGER_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `PAGER_CONFIG_DIR` and `PAGER_CONFIG_FILE` are set,
    /// or if `PAGER_APP_ENV` names an unknown environment.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir_var = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && config_dir_var.is_some() {
            return Err(ConfigError::mutual_exclusivity(
                "PAGER_CONFIG_DIR and PAGER_CONFIG_FILE cannot both be set. \
                 Use PAGER_CONFIG_DIR for layered configuration or \
                 PAGER_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir: config_dir_var
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::try_from_env()?,
        })
    }

    /// Create a loader that reads a single configuration file
    ///
    /// Environment variable overrides still apply on top of the file.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment used to pick `{environment}.toml`
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Get the configuration directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load configuration from all sources
    ///
    /// If a single file is configured, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the single configuration file does not exist
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            config_dir = %self.config_dir.display(),
            single_file = ?self.config_file,
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            Self::add_file_source(builder, config_file, true)?
        } else {
            self.build_layered_config(builder)?
        };

        // PAGER_SERVER__PORT -> server.port
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(&self, builder: Builder) -> Result<Builder, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, false)?;

        let env_path = self.config_dir.join(self.environment.config_file_name());
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    /// Add a file source to the config builder
    fn add_file_source(
        builder: Builder,
        path: &Path,
        required: bool,
    ) -> Result<Builder, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let path_str = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!(
                "Configuration path is not valid UTF-8: {}",
                path.display()
            ))
        })?;

        Ok(builder.add_source(File::new(path_str, FileFormat::Toml).required(required)))
    }

    /// Add environment variable source to the config builder
    ///
    /// Examples:
    /// - `PAGER_SERVER__PORT` -> `server.port`
    /// - `PAGER_PAGINATION__DEFAULT_ITEMS_PER_PAGE` -> `pagination.default_items_per_page`
    fn add_env_source(builder: Builder) -> Builder {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
            environment: AppEnvironment::default(),
        })
    }
}
