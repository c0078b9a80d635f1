// src/config/resolve.rs

//! Merge CLI flags on top of the config file.
//!
//! Precedence for every setting: CLI flag, then config file, then default.

use std::path::{Path, PathBuf};

use crate::cli::CliArgs;
use crate::config::model::ConfigFile;
use crate::config::validate::validate_command;
use crate::errors::Result;
use crate::invoker::InvokerSettings;
use crate::types::{LogSinkKind, OutputMode, ReportLevel};

/// Everything needed to build an invoker and its log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub invoker: InvokerSettings,
    pub sink: SinkSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkSettings {
    Tracing,
    /// Log file path, joined onto the working directory when relative.
    File(PathBuf),
}

/// Resolve the final settings.
///
/// `base_dir` is where the process looked for its config: the
/// `--working-dir` flag if given, otherwise the executable's directory.
/// A relative `working_dir` in the file is taken relative to it.
pub fn resolve_settings(args: &CliArgs, cfg: &ConfigFile, base_dir: &Path) -> Result<ResolvedSettings> {
    let working_dir = match (&args.working_dir, &cfg.invoker.working_dir) {
        (Some(cli), _) => cli.clone(),
        (None, Some(from_file)) => base_dir.join(from_file),
        (None, None) => base_dir.to_path_buf(),
    };

    let command = match &args.command {
        Some(cmd) => {
            validate_command(cmd)?;
            cmd.clone()
        }
        None => cfg.invoker.command.clone(),
    };

    let output_mode = if args.capture_output {
        OutputMode::Capture
    } else {
        cfg.invoker.output
    };

    let report_level = if args.quiet {
        ReportLevel::Quiet
    } else {
        cfg.report.level
    };

    let always_exit_zero = cfg.invoker.always_exit_zero && !args.propagate_exit_code;

    let sink = match (&args.log_file, cfg.log.sink, &cfg.log.path) {
        (Some(path), _, _) => SinkSettings::File(working_dir.join(path)),
        (None, LogSinkKind::File, Some(path)) => SinkSettings::File(working_dir.join(path)),
        // Validation guarantees a path for the file sink.
        (None, LogSinkKind::File, None) | (None, LogSinkKind::Tracing, _) => SinkSettings::Tracing,
    };

    Ok(ResolvedSettings {
        invoker: InvokerSettings {
            working_dir,
            command,
            output_mode,
            report_level,
            always_exit_zero,
            timestamp_format: cfg.invoker.timestamp_format.clone(),
        },
        sink,
    })
}
