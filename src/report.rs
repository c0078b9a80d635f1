// src/report.rs

//! Text produced after a run: the log sink line and the stdout summary.

use std::io::{self, Write};

use crate::sink::Status;
use crate::types::CommandResult;

/// Status line for the log sink.
///
/// `timestamp` only appears in the success message.
pub fn status_line(result: &CommandResult, timestamp: &str) -> (Status, String) {
    if result.success() {
        (
            Status::Success,
            format!("Laravel scheduler executed successfully at {timestamp}"),
        )
    } else {
        (
            Status::Failure,
            format!("Laravel scheduler failed with code: {}", result.exit_code),
        )
    }
}

/// Stdout summary lines, without trailing newlines.
///
/// The `Output:` entry is a single string that may itself contain `\n`
/// separators, one per captured line.
pub fn summary_lines(result: &CommandResult, timestamp: &str) -> Vec<String> {
    let mut lines = vec![
        format!("Laravel scheduler executed at {timestamp}"),
        format!("Return code: {}", result.exit_code),
    ];
    if !result.output.is_empty() {
        lines.push(format!("Output: {}", result.output.join("\n")));
    }
    lines
}

pub fn write_summary<W: Write + ?Sized>(
    out: &mut W,
    result: &CommandResult,
    timestamp: &str,
) -> io::Result<()> {
    for line in summary_lines(result, timestamp) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
