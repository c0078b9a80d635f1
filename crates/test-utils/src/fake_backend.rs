use std::collections::VecDeque;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use artisan_cron::errors::{InvokerError, Result};
use artisan_cron::exec::CommandBackend;
use artisan_cron::types::{CommandResult, OutputMode};

/// One call the invoker made to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub working_dir: PathBuf,
    pub command: String,
    pub mode: OutputMode,
}

/// What the next call should return.
#[derive(Debug)]
pub enum Scripted {
    Exit(CommandResult),
    /// Simulates a spawn failure.
    SpawnError,
}

/// A fake backend that:
/// - records every call
/// - returns scripted results in order, then exit 0 with no output.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    runs: Arc<Mutex<Vec<RecordedRun>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exiting(code: i32) -> Self {
        Self::new().then_exit(code, &[])
    }

    pub fn then_exit(self, code: i32, output: &[&str]) -> Self {
        let output = output.iter().map(|s| s.to_string()).collect();
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Exit(CommandResult::new(code, output)));
        self
    }

    pub fn then_spawn_error(self) -> Self {
        self.script.lock().unwrap().push_back(Scripted::SpawnError);
        self
    }

    /// Calls recorded so far (shared between clones).
    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }
}

impl CommandBackend for FakeBackend {
    fn run<'a>(
        &'a mut self,
        working_dir: &'a Path,
        command: &'a str,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = Result<CommandResult>> + Send + 'a>> {
        self.runs.lock().unwrap().push(RecordedRun {
            working_dir: working_dir.to_path_buf(),
            command: command.to_string(),
            mode,
        });
        let next = self.script.lock().unwrap().pop_front();

        Box::pin(async move {
            match next {
                Some(Scripted::Exit(result)) => Ok(result),
                Some(Scripted::SpawnError) => Err(InvokerError::Spawn {
                    command: command.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "php: not found"),
                }),
                None => Ok(CommandResult::new(0, Vec::new())),
            }
        })
    }
}
