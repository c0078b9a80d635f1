// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag is optional: the cron entry is expected to run the binary
//! with no arguments at all, in which case settings come from the config
//! file (if any) and the built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `artisan-cron`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "artisan-cron",
    version,
    about = "Run `php artisan schedule:run` from a cron trigger and record the result.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML).
    ///
    /// Default: `artisan-cron.toml` in the working directory, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the command runs in.
    ///
    /// Default: the directory containing this executable.
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Shell command to run instead of the configured one.
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Capture the command's stdout instead of discarding it.
    #[arg(long)]
    pub capture_output: bool,

    /// Exit with the command's exit code instead of always exiting 0.
    #[arg(long)]
    pub propagate_exit_code: bool,

    /// Do not print the run summary to stdout.
    #[arg(long, short)]
    pub quiet: bool,

    /// Append the status line to this file instead of the tracing log.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ARTISAN_CRON_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the settings, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let args = CliArgs::try_parse_from(["artisan-cron"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.working_dir.is_none());
        assert!(!args.propagate_exit_code);
        assert!(!args.quiet);
    }

    #[test]
    fn overrides_parse() {
        let args = CliArgs::try_parse_from([
            "artisan-cron",
            "--working-dir",
            "/srv/app",
            "--command",
            "php artisan queue:work --once",
            "--capture-output",
            "--propagate-exit-code",
            "-q",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.working_dir, Some(PathBuf::from("/srv/app")));
        assert_eq!(args.command.as_deref(), Some("php artisan queue:work --once"));
        assert!(args.capture_output);
        assert!(args.propagate_exit_code);
        assert!(args.quiet);
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
