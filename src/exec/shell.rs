// src/exec/shell.rs

//! Single shell command runner.

use std::path::Path;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::{InvokerError, Result};
use crate::types::{CommandResult, OutputMode};

/// Run `command` through the platform shell inside `working_dir`.
///
/// The working directory is handed to the child; the current process never
/// changes its own cwd, so concurrent runs in one process can't interfere.
pub async fn run_shell(working_dir: &Path, command: &str, mode: OutputMode) -> Result<CommandResult> {
    ensure_working_dir(working_dir)?;

    debug!(cmd = %command, cwd = %working_dir.display(), ?mode, "starting command");

    let mut cmd = shell_command(command);
    cmd.current_dir(working_dir)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    match mode {
        OutputMode::Discard => {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        OutputMode::Capture => {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        }
    }

    let mut child = cmd.spawn().map_err(|source| InvokerError::Spawn {
        command: command.to_string(),
        source,
    })?;

    // Both pipes are drained while we wait, so a chatty child can't block
    // on a full buffer.
    let stdout_task = child.stdout.take().map(|s| tokio::spawn(collect_lines(s)));

    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(for_each_line(stderr, "stderr", |line| {
            debug!("stderr: {}", line);
        }));
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for '{command}'"))?;

    let output = match stdout_task {
        Some(handle) => handle.await.context("joining stdout reader")?,
        None => Vec::new(),
    };

    let exit_code = status.code().unwrap_or(-1);

    debug!(
        exit_code,
        success = status.success(),
        captured_lines = output.len(),
        "command exited"
    );

    Ok(CommandResult::new(exit_code, output))
}

/// Build a shell command appropriate for the platform.
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

fn ensure_working_dir(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(InvokerError::WorkingDirectory {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        }),
        Err(e) => Err(InvokerError::WorkingDirectory {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Read lines until EOF, trailing whitespace stripped.
async fn collect_lines<R>(reader: R) -> Vec<String>
where
    R: AsyncRead + Unpin,
{
    let mut out = Vec::new();
    for_each_line(reader, "stdout", |line| out.push(line)).await;
    out
}

/// Feed every line of `reader` to `f` until EOF.
///
/// Bytes that aren't valid UTF-8 are replaced rather than ending the read,
/// so the pipe stays drained and the child never sees SIGPIPE.
async fn for_each_line<R, F>(reader: R, stream: &'static str, mut f: F)
where
    R: AsyncRead + Unpin,
    F: FnMut(String),
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => f(String::from_utf8_lossy(&buf).trim_end().to_string()),
            Err(e) => {
                warn!(stream, error = %e, "failed reading child output");
                break;
            }
        }
    }
}
