// src/config/validate.rs

use chrono::format::{Item, StrftimeItems};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{InvokerError, Result};
use crate::types::LogSinkKind;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::InvokerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.invoker, raw.report, raw.log))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_command(&cfg.invoker.command)?;
    validate_timestamp_format(&cfg.invoker.timestamp_format)?;
    validate_log_section(cfg)?;
    Ok(())
}

pub(crate) fn validate_command(command: &str) -> Result<()> {
    if command.trim().is_empty() {
        return Err(InvokerError::ConfigError(
            "[invoker].command must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reject patterns `chrono` can't render; formatting one of those later
/// would panic inside `to_string()`.
pub(crate) fn validate_timestamp_format(format: &str) -> Result<()> {
    if format.is_empty() {
        return Err(InvokerError::ConfigError(
            "[invoker].timestamp_format must not be empty".to_string(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(InvokerError::ConfigError(format!(
            "[invoker].timestamp_format '{}' is not a valid strftime pattern",
            format
        )));
    }
    Ok(())
}

fn validate_log_section(cfg: &RawConfigFile) -> Result<()> {
    if cfg.log.sink == LogSinkKind::File && cfg.log.path.is_none() {
        return Err(InvokerError::ConfigError(
            "[log].path is required when sink = \"file\"".to_string(),
        ));
    }
    Ok(())
}
