// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::clock::DEFAULT_TIMESTAMP_FORMAT;
use crate::types::{LogSinkKind, OutputMode, ReportLevel};

/// The command the cron entry exists to run.
pub const DEFAULT_COMMAND: &str = "php artisan schedule:run";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [invoker]
/// working_dir = "/home/app/laravel"
/// command = "php artisan schedule:run"
/// output = "discard"
/// always_exit_zero = true
///
/// [report]
/// level = "summary"
///
/// [log]
/// sink = "file"
/// path = "storage/logs/scheduler-cron.log"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub invoker: InvokerSection,

    #[serde(default)]
    pub report: ReportSection,

    #[serde(default)]
    pub log: LogSection,
}

/// Validated configuration.
///
/// Only constructed through `TryFrom<RawConfigFile>`, so holders can rely
/// on the command being non-blank and the timestamp pattern being usable.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub invoker: InvokerSection,
    pub report: ReportSection,
    pub log: LogSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        invoker: InvokerSection,
        report: ReportSection,
        log: LogSection,
    ) -> Self {
        Self {
            invoker,
            report,
            log,
        }
    }
}

/// `[invoker]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvokerSection {
    /// Directory the command runs in.
    ///
    /// If `None`, the directory containing the executable is used.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Shell command line, run through `sh -c`.
    #[serde(default = "default_command")]
    pub command: String,

    /// `"discard"` (default) or `"capture"`.
    #[serde(default)]
    pub output: OutputMode,

    /// If true, the process exits 0 whatever the command returned.
    #[serde(default = "default_always_exit_zero")]
    pub always_exit_zero: bool,

    /// `chrono` strftime pattern for the timestamps in the log line and
    /// the summary.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

fn default_always_exit_zero() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for InvokerSection {
    fn default() -> Self {
        Self {
            working_dir: None,
            command: default_command(),
            output: OutputMode::default(),
            always_exit_zero: default_always_exit_zero(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// `[report]` section: what gets printed to stdout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default)]
    pub level: ReportLevel,
}

/// `[log]` section: where the status line goes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    #[serde(default)]
    pub sink: LogSinkKind,

    /// Log file for `sink = "file"`. Relative paths are resolved against
    /// the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
