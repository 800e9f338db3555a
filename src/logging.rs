//! Logger setup for the runner.
//!
//! While the game owns the terminal (raw mode, alternate screen) nothing may
//! be written to stderr. Without `TETRIS_LOG_PATH`, records are held in a
//! [`LogBuffer`] and printed once the terminal has been restored.

use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

use crate::config::GameConfig;

/// Upper bound on held-back log output; later records are dropped.
pub const LOG_BUFFER_LIMIT: usize = 64 * 1024;

/// In-memory log sink shared between the logger and the runner.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything written so far, leaving the buffer empty.
    pub fn take(&self) -> Vec<u8> {
        match self.bytes.lock() {
            Ok(mut bytes) => std::mem::take(&mut *bytes),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Write held-back records to stderr.
    pub fn flush_to_stderr(&self) -> io::Result<()> {
        let bytes = self.take();
        if bytes.is_empty() {
            return Ok(());
        }
        let mut stderr = io::stderr().lock();
        stderr.write_all(&bytes)?;
        stderr.flush()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = match self.bytes.lock() {
            Ok(bytes) => bytes,
            Err(poisoned) => poisoned.into_inner(),
        };
        let room = LOG_BUFFER_LIMIT.saturating_sub(bytes.len());
        bytes.extend_from_slice(&buf[..buf.len().min(room)]);
        // Report the whole write as accepted so the logger never retries.
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install the global logger.
///
/// Default filter is `info` when logging to a file and `warn` otherwise;
/// `RUST_LOG` overrides it. Returns the buffer to flush after the terminal
/// is restored, if records are being held back.
pub fn init_logging(config: &GameConfig) -> Result<Option<LogBuffer>> {
    let default_level = if config.log_path.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    let held = match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            None
        }
        None => {
            let buffer = LogBuffer::new();
            builder.target(env_logger::Target::Pipe(Box::new(buffer.clone())));
            Some(buffer)
        }
    };

    builder.init();
    Ok(held)
}
