// src/exec/backend.rs

//! Pluggable command backend abstraction.
//!
//! The invoker talks to a `CommandBackend` instead of spawning processes
//! itself, so tests can script exit codes and output without a PHP install.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::{CommandResult, OutputMode};

use super::shell::run_shell;

/// Trait abstracting how the command is executed.
///
/// Production code uses [`ShellBackend`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandBackend: Send {
    /// Run `command` in `working_dir` and wait for it to finish.
    ///
    /// An `Err` means the command never ran (bad directory, spawn failure).
    /// A command that ran and failed is an `Ok` with a non-zero exit code.
    fn run<'a>(
        &'a mut self,
        working_dir: &'a Path,
        command: &'a str,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = Result<CommandResult>> + Send + 'a>>;
}

/// Real backend: `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellBackend;

impl CommandBackend for ShellBackend {
    fn run<'a>(
        &'a mut self,
        working_dir: &'a Path,
        command: &'a str,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = Result<CommandResult>> + Send + 'a>> {
        Box::pin(run_shell(working_dir, command, mode))
    }
}
