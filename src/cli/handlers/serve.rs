//! Serve command handler
//!
//! Handles the serve command's dry-run validation. Actual server startup is
//! driven from `main` once the executor reports [`CommandOutcome::StartServer`].
//!
//! [`CommandOutcome::StartServer`]: crate::cli::CommandOutcome::StartServer

use crate::config::Settings;
use crate::error::AppResult;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the serve command with optional dry-run support
    ///
    /// # Errors
    /// - Configuration validation errors
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            self.validate_only().await
        } else {
            Ok(())
        }
    }

    /// Validate configuration without starting the server
    pub async fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Request timeout: {}s",
            self.config.server.request_timeout
        );
        println!(
            "✓ Page size: default {}, max {}",
            self.config.pagination.default_items_per_page,
            self.config.pagination.max_items_per_page
        );
        println!("✓ Logger configuration is valid");

        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}
