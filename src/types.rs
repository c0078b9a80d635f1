// src/types.rs

use serde::Deserialize;

/// Result of running the scheduler command once.
///
/// Exactly one of these is produced per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code of the child; `-1` when the process produced no code
    /// (killed by a signal, or could not be spawned).
    pub exit_code: i32,
    /// Captured stdout lines, in order. Always empty with [`OutputMode::Discard`].
    pub output: Vec<String>,
}

impl CommandResult {
    pub fn new(exit_code: i32, output: Vec<String>) -> Self {
        Self { exit_code, output }
    }

    /// Result used when the command could not be run at all.
    pub fn not_started() -> Self {
        Self {
            exit_code: -1,
            output: Vec::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// What happens to the child's stdout/stderr.
///
/// - `Discard`: both streams go to the null device, as `>> /dev/null 2>&1`
///   would do. Nothing is captured.
/// - `Capture`: stdout is captured line by line and reported; stderr is
///   drained and logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Discard,
    Capture,
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::Discard
    }
}

/// How much is printed to stdout after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    /// Nothing on stdout; the log sink line is the only trace.
    Quiet,
    /// Timestamp, return code and captured output (if any).
    Summary,
}

impl Default for ReportLevel {
    fn default() -> Self {
        ReportLevel::Summary
    }
}

/// Where the one-line status message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSinkKind {
    /// Through the `tracing` subscriber (stderr).
    Tracing,
    /// Appended to a log file.
    File,
}

impl Default for LogSinkKind {
    fn default() -> Self {
        LogSinkKind::Tracing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_started_is_a_failure() {
        let r = CommandResult::not_started();
        assert_eq!(r.exit_code, -1);
        assert!(!r.success());
        assert!(r.output.is_empty());
    }
}
