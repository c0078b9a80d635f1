// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the scheduler command,
//! using `tokio::process::Command`, and turning the child's exit status
//! (plus any captured output) into a [`CommandResult`](crate::types::CommandResult).
//!
//! - [`shell`] spawns the command through the platform shell and waits on it.
//! - [`backend`] provides the `CommandBackend` trait and the production
//!   `ShellBackend`; tests replace it with a fake that never spawns anything.

pub mod backend;
pub mod shell;

pub use backend::{CommandBackend, ShellBackend};
pub use shell::run_shell;
