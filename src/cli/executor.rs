//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{RenderCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// What `main` should do once a command has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Start the HTTP server with the merged settings
    StartServer,
    /// The command finished; exit
    Done,
}

/// Execute a CLI command with the given settings
///
/// `serve` without `--dry-run`, and no subcommand at all, return
/// [`CommandOutcome::StartServer`]; server startup itself happens in `main`.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: &Settings) -> AppResult<CommandOutcome> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            ServeCommandHandler::new(settings.clone())
                .execute(true)
                .await?;
            Ok(CommandOutcome::Done)
        }
        Some(Commands::Serve { .. }) | None => Ok(CommandOutcome::StartServer),
        Some(Commands::Render(args)) => {
            RenderCommandHandler::new(settings).execute(args).await?;
            Ok(CommandOutcome::Done)
        }
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })?;

    if let Some(Commands::Serve { host, port, .. }) = &cli.command {
        validate_serve_args(host.as_deref(), *port);
    }

    Ok(())
}

/// Warn about host/port combinations that are likely to fail at bind time
fn validate_serve_args(host: Option<&str>, port: Option<u16>) {
    if let (Some(host_addr), Some(port_num)) = (host, port) {
        if port_num < 1024 && host_addr == "0.0.0.0" {
            eprintln!(
                "Warning: Binding to 0.0.0.0 on port {} requires root privileges",
                port_num
            );
        }

        if host_addr == "localhost" && port_num == 80 {
            eprintln!("Warning: Using port 80 with localhost may conflict with other services");
        }
    }
}
