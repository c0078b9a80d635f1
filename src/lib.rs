// src/lib.rs

pub mod cli;
pub mod clock;
pub mod config;
pub mod errors;
pub mod exec;
pub mod invoker;
pub mod logging;
pub mod report;
pub mod sink;
pub mod types;

use std::path::PathBuf;

use tracing::debug;

use crate::cli::CliArgs;
use crate::clock::SystemClock;
use crate::config::loader::load_effective;
use crate::config::{ResolvedSettings, SinkSettings, resolve_settings};
use crate::errors::{InvokerError, Result};
use crate::exec::ShellBackend;
use crate::invoker::Invoker;
use crate::sink::{FileSink, LogSink, TracingSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - working directory + config discovery
/// - CLI overrides
/// - the shell backend, system clock and log sink
///
/// Returns the exit code the process should end with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let base_dir = match &args.working_dir {
        Some(dir) => dir.clone(),
        None => executable_dir()?,
    };

    let cfg = load_effective(args.config.as_deref(), &base_dir)?;
    let settings = resolve_settings(&args, &cfg, &base_dir)?;

    if args.dry_run {
        print_dry_run(&settings);
        return Ok(0);
    }

    let sink = build_sink(&settings.sink);
    let mut invoker = Invoker::new(settings.invoker, ShellBackend, SystemClock, sink);

    let mut stdout = std::io::stdout();
    let invocation = invoker.invoke(&mut stdout).await;

    debug!(
        command_exit = invocation.result.exit_code,
        process_exit = invocation.exit_code,
        "invocation finished"
    );

    Ok(invocation.exit_code)
}

/// Build the log sink chosen by the settings.
pub fn build_sink(settings: &SinkSettings) -> Box<dyn LogSink> {
    match settings {
        SinkSettings::Tracing => Box::new(TracingSink),
        SinkSettings::File(path) => Box::new(FileSink::new(path)),
    }
}

/// Directory containing the running executable.
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| InvokerError::WorkingDirectory {
            path: exe.clone(),
            reason: "executable has no parent directory".to_string(),
        })
}

/// Simple dry-run output: print the resolved settings.
fn print_dry_run(settings: &ResolvedSettings) {
    let inv = &settings.invoker;
    println!("artisan-cron dry-run");
    println!("  working_dir = {}", inv.working_dir.display());
    println!("  command = {}", inv.command);
    println!("  output = {:?}", inv.output_mode);
    println!("  report = {:?}", inv.report_level);
    println!("  always_exit_zero = {}", inv.always_exit_zero);
    println!("  timestamp_format = {}", inv.timestamp_format);
    match &settings.sink {
        SinkSettings::Tracing => println!("  log = tracing (stderr)"),
        SinkSettings::File(path) => println!("  log = file {}", path.display()),
    }

    debug!("dry-run complete (no execution)");
}
