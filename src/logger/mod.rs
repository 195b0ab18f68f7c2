//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output on stderr with color control
//! - File output with multiple formats (Full, Compact, JSON)

pub mod config;
pub mod error;
pub(crate) mod writer;

pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt,
    layer::{Layered, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};
use writer::LogFileWriter;

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Initialize the global subscriber with the given configuration
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    let filter = config.env_filter();
    build_subscriber(&config, filter)?.try_init()?;
    Ok(())
}

/// Compose the enabled outputs under `filter` without installing them
pub(crate) fn build_subscriber(
    config: &LoggerConfig,
    filter: EnvFilter,
) -> Result<Box<dyn Subscriber + Send + Sync>, LoggerError> {
    config.validate()?;

    let file_layer = if config.file.enabled {
        Some(file_layer::<Layered<EnvFilter, Registry>>(&config.file)?)
    } else {
        None
    };

    let console_layer = config.console.enabled.then(|| {
        fmt::layer()
            .with_ansi(use_ansi(&config.console))
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
    });

    // File layer goes first so span fields are not formatted with ANSI codes.
    // See: https://github.com/tokio-rs/tracing/issues/1817
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer);

    Ok(Box::new(subscriber))
}

fn use_ansi(config: &ConsoleConfig) -> bool {
    config.colored && std::io::stderr().is_terminal()
}

fn file_layer<S>(config: &FileConfig) -> Result<BoxedLayer<S>, LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let writer = LogFileWriter::new(config)?;

    let layer = match config.format {
        LogFormat::Full => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(writer)
            .boxed(),
    };

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn logger_config(console: bool, file: Option<(&Path, LogFormat)>) -> LoggerConfig {
        let file = match file {
            Some((path, format)) => FileConfig {
                enabled: true,
                path: path.to_path_buf(),
                append: true,
                format,
            },
            None => FileConfig {
                enabled: false,
                ..FileConfig::default()
            },
        };
        LoggerConfig {
            console: ConsoleConfig::new(console, false),
            file,
            level: tracing::Level::INFO,
        }
    }

    fn emit(config: &LoggerConfig, message: &str) {
        let subscriber = build_subscriber(config, EnvFilter::new("info")).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(page = 2, "{message}");
            tracing::debug!("filtered out");
        });
    }

    #[test]
    fn test_every_file_format_with_and_without_console() {
        for console in [true, false] {
            for format in LogFormat::ALL {
                let dir = tempdir().unwrap();
                let path = dir.path().join("logs").join("app.log");
                let config = logger_config(console, Some((&path, format)));

                emit(&config, "strip rendered");

                let contents = fs::read_to_string(&path).unwrap();
                assert!(
                    contents.contains("strip rendered"),
                    "{format:?} console={console}: {contents}"
                );
                assert!(!contents.contains("filtered out"));
                assert!(!contents.contains("\u{1b}["), "file output must be plain text");
            }
        }
    }

    #[test]
    fn test_json_file_lines_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let config = logger_config(true, Some((&path, LogFormat::Json)));

        emit(&config, "json line");

        let contents = fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["fields"]["message"], "json line");
        assert_eq!(value["fields"]["page"], 2);
    }

    #[test]
    fn test_console_only_builds() {
        let config = logger_config(true, None);
        emit(&config, "console only");
    }

    #[test]
    fn test_no_outputs_rejected() {
        let config = logger_config(false, None);
        let result = build_subscriber(&config, EnvFilter::new("info"));
        assert!(matches!(result, Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_unwritable_file_path_rejected() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let config = logger_config(true, Some((&blocker.join("app.log"), LogFormat::Full)));

        let result = build_subscriber(&config, EnvFilter::new("info"));
        assert!(matches!(result, Err(LoggerError::Io(_))));
    }
}
