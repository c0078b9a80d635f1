// src/invoker.rs

//! The execute → log → report sequence.
//!
//! One call to [`Invoker::invoke`] runs the command once, writes exactly one
//! status line to the log sink, optionally prints the summary, and works out
//! the exit code the process should end with. A failing command is reported,
//! never propagated as an error.

use std::io::Write;
use std::path::PathBuf;

use tracing::{error, warn};

use crate::clock::Clock;
use crate::exec::CommandBackend;
use crate::report::{status_line, write_summary};
use crate::sink::{LogSink, record};
use crate::types::{CommandResult, OutputMode, ReportLevel};

/// Per-run settings, fully resolved from CLI + config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokerSettings {
    pub working_dir: PathBuf,
    pub command: String,
    pub output_mode: OutputMode,
    pub report_level: ReportLevel,
    /// Exit 0 even when the command fails.
    pub always_exit_zero: bool,
    pub timestamp_format: String,
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub result: CommandResult,
    /// Status this process should exit with.
    pub exit_code: i32,
}

pub struct Invoker<B, C> {
    settings: InvokerSettings,
    backend: B,
    clock: C,
    sink: Box<dyn LogSink>,
}

impl<B, C> Invoker<B, C>
where
    B: CommandBackend,
    C: Clock,
{
    pub fn new(settings: InvokerSettings, backend: B, clock: C, sink: Box<dyn LogSink>) -> Self {
        Self {
            settings,
            backend,
            clock,
            sink,
        }
    }

    /// Run the command once and report on it.
    ///
    /// `out` receives the summary unless the report level is `quiet`.
    pub async fn invoke<W: Write>(&mut self, out: &mut W) -> Invocation {
        let settings = &self.settings;

        let result = match self
            .backend
            .run(&settings.working_dir, &settings.command, settings.output_mode)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                error!(
                    cmd = %settings.command,
                    cwd = %settings.working_dir.display(),
                    error = %err,
                    "command could not be run"
                );
                CommandResult::not_started()
            }
        };

        let logged_at = self.clock.timestamp(&settings.timestamp_format);
        let (status, message) = status_line(&result, &logged_at);
        record(self.sink.as_mut(), status, &logged_at, &message);

        if settings.report_level == ReportLevel::Summary {
            let printed_at = self.clock.timestamp(&settings.timestamp_format);
            if let Err(err) = write_summary(out, &result, &printed_at) {
                warn!(error = %err, "failed to write run summary");
            }
        }

        let exit_code = process_exit_code(&result, settings.always_exit_zero);
        Invocation { result, exit_code }
    }
}

/// Exit status for this process given the command's result.
///
/// With `always_exit_zero` this is always 0. Otherwise the command's code is
/// passed through when it fits in 0..=255; anything else becomes 1.
pub fn process_exit_code(result: &CommandResult, always_exit_zero: bool) -> i32 {
    if always_exit_zero {
        return 0;
    }
    match result.exit_code {
        code @ 0..=255 => code,
        _ => 1,
    }
}
