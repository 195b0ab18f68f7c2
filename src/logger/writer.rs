//! File writer for the logger

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;

/// Shared, buffered log file handle
///
/// Once a write or flush to the file fails, every later line goes to stderr
/// for the rest of the process.
pub struct LogFileWriter {
    state: Arc<Mutex<WriterState>>,
}

struct WriterState {
    sink: Box<dyn Write + Send>,
    fallback_mode: bool,
}

impl WriterState {
    fn fall_back(&mut self, error: &io::Error) {
        self.fallback_mode = true;
        eprintln!("[Logger] Log file write failed, falling back to stderr: {}", error);
    }
}

impl LogFileWriter {
    /// Open the configured file, creating parent directories as needed
    pub fn new(config: &FileConfig) -> Result<Self, LoggerError> {
        if config.path.as_os_str().is_empty() {
            return Err(LoggerError::config("Log file path cannot be empty"));
        }

        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = open_log_file(&config.path, config.append)?;
        Ok(Self::from_writer(file))
    }

    pub(crate) fn from_writer(sink: impl Write + Send + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(WriterState {
                sink: Box::new(sink),
                fallback_mode: false,
            })),
        }
    }

    /// Check if the writer has given up on the file
    pub fn is_in_fallback_mode(&self) -> bool {
        self.state.lock().map(|s| s.fallback_mode).unwrap_or(false)
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = LogWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriterGuard {
            state: self.state.clone(),
        }
    }
}

/// Per-event handle returned by [`LogFileWriter::make_writer`]
pub struct LogWriterGuard {
    state: Arc<Mutex<WriterState>>,
}

impl Write for LogWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire writer lock"))?;

        if state.fallback_mode {
            return io::stderr().write(buf);
        }

        match state.sink.write(buf) {
            Ok(written) => Ok(written),
            Err(e) => {
                state.fall_back(&e);
                io::stderr().write(buf)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire writer lock"))?;

        if state.fallback_mode {
            return io::stderr().flush();
        }

        if let Err(e) = state.sink.flush() {
            state.fall_back(&e);
            return io::stderr().flush();
        }
        Ok(())
    }
}

impl Drop for LogWriterGuard {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if !state.fallback_mode {
                if let Err(e) = state.sink.flush() {
                    state.fall_back(&e);
                }
            }
        }
    }
}

fn open_log_file(path: &Path, append: bool) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    Ok(BufWriter::new(file))
}
