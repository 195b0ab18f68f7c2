//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Pagination controls for long listings, as an HTTP API or a one-shot render
#[derive(Parser, Debug)]
#[command(name = "grants-pager")]
#[command(about = "Pagination controls for long listings")]
#[command(long_about = "
grants-pager computes the pagination strip for a listing: the \"Showing X to Y
of Z\" summary, Previous/Next links, the numbered pages around the current one
and the ellipses that stand in for skipped ranges.

EXAMPLES:
    # Start the HTTP API with default configuration
    grants-pager serve

    # Start the API on all interfaces, port 8080
    grants-pager serve --host 0.0.0.0 --port 8080

    # Use a custom configuration file
    grants-pager --config /path/to/config.toml serve

    # Check configuration without starting the server
    grants-pager serve --dry-run

    # Print the strip for page 5 of 100 items
    grants-pager render --total-items 100 --page 5

    # Same, as the JSON body the API returns
    grants-pager render --total-items 100 --page 5 --format json
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered `config/` directory.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/grants-pager/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` is layered over `default.toml`.
    ///
    /// Available values: development (dev), production (prod), test
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API (default)
    ///
    /// Examples:
    ///   grants-pager serve                            # Start with defaults
    ///   grants-pager serve --host 0.0.0.0 --port 80   # Bind to all interfaces on port 80
    ///   grants-pager serve --dry-run                  # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections from any interface.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Takes precedence over the configuration file and the global --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the pagination strip for one page
    ///
    /// Examples:
    ///   grants-pager render --total-items 31
    ///   grants-pager render --total-items 100 --page 5 --page-size 10
    ///   grants-pager render --total-items 48 --page 2 --path "/grants?status=open"
    Render(RenderArgs),
}

/// Arguments of the `render` command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RenderArgs {
    /// Total number of items in the listing
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub total_items: i64,

    /// Current page, starting at 1
    #[arg(long, value_name = "P", allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Items per page (defaults to `pagination.default_items_per_page`)
    #[arg(long, value_name = "S", allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Noun used in the summary, e.g. "applications"
    #[arg(long, value_name = "LABEL")]
    pub item_type: Option<String>,

    /// Listing route used for hrefs, optionally with a query string
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output formats of the `render` command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Summary line followed by the control strip
    #[default]
    Text,
    /// The JSON body returned by `GET /api/pagination`
    Json,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "production", alias = "prod")]
    Production,
    #[value(name = "test")]
    Test,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Production => crate::config::Environment::Production,
            Environment::Test => crate::config::Environment::Test,
        }
    }
}
