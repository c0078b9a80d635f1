// src/config/mod.rs

//! Configuration loading and validation for artisan-cron.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like a non-blank command (`validate.rs`).
//! - Merge CLI overrides on top of the file (`resolve.rs`).

pub mod loader;
pub mod model;
pub mod resolve;
pub mod validate;

pub use loader::{DEFAULT_CONFIG_FILE, load_and_validate, load_effective, load_from_path};
pub use model::{ConfigFile, InvokerSection, LogSection, RawConfigFile, ReportSection};
pub use resolve::{ResolvedSettings, SinkSettings, resolve_settings};
