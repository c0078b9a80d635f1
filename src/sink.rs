// src/sink.rs

//! Log sinks for the one-line status message written after every run.
//!
//! A failing sink never aborts the invocation: write errors are reported
//! through `tracing::warn!` and otherwise ignored.

use std::fmt::Debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

/// `tracing` target of the status line; kept enabled regardless of level.
pub const STATUS_TARGET: &str = "artisan_cron::status";

/// Whether the status line reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

/// Destination of the status line.
pub trait LogSink: Send + Debug {
    /// Write one line. `timestamp` is only used by sinks that prefix lines
    /// with their own time.
    fn write_line(&mut self, status: Status, timestamp: &str, message: &str) -> Result<()>;
}

/// Writes a status line, downgrading any error to a warning.
pub fn record(sink: &mut dyn LogSink, status: Status, timestamp: &str, message: &str) {
    if let Err(err) = sink.write_line(status, timestamp, message) {
        warn!(error = %err, "failed to write status line to log sink");
    }
}

/// Emits the status line through the global `tracing` subscriber (stderr).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&mut self, status: Status, _timestamp: &str, message: &str) -> Result<()> {
        match status {
            Status::Success => info!(target: STATUS_TARGET, "{message}"),
            Status::Failure => error!(target: STATUS_TARGET, "{message}"),
        }
        Ok(())
    }
}

/// Appends `[<timestamp>] <message>` to a file.
///
/// The file is opened in append mode for each write, so concurrent
/// invocations pointing at the same log each add whole lines.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSink for FileSink {
    fn write_line(&mut self, _status: Status, timestamp: &str, message: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating dir {:?}", parent))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening log file {:?}", self.path))?;
        // Single write call per line.
        let line = format!("[{timestamp}] {message}\n");
        file.write_all(line.as_bytes())
            .with_context(|| format!("writing to log file {:?}", self.path))?;
        Ok(())
    }
}
