//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};

/// Applies CLI overrides on top of file and environment configuration
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration selected by `--config` and `--env`
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_sources(cli.config.as_deref(), cli.env.map(Environment::from))
    }

    /// Load from a specific file or from the layered directory
    pub fn from_sources(
        config_path: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let loader = match config_path {
            Some(path) => {
                Self::validate_config_file_access(path)?;
                ConfigLoader::with_file(path)
            }
            None => ConfigLoader::new()?,
        };

        let loader = match environment {
            Some(environment) => loader.with_environment(environment),
            None => loader,
        };

        Ok(Self::new(loader.load()?))
    }

    fn validate_config_file_access(path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!(
                    "Configuration path is not a readable file: '{}'",
                    path.display()
                ),
            });
        }

        std::fs::File::open(path)
            .map(|_| ())
            .map_err(|e| ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read configuration file '{}': {}", path.display(), e),
            })
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// CLI arguments win over file and environment values; a command-level
    /// `--log-level` wins over the global `--verbose`/`--quiet` flags.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
            Commands::Render(_) => {}
        }
    }

    /// Base configuration before CLI overrides
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
