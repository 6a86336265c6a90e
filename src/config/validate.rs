// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{QmdWatchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = QmdWatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.watch, raw.render))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    if let Some(ms) = cfg.watch.interval_ms {
        validate_interval_ms(ms, "[watch].interval_ms")?;
    }
    if let Some(ref ext) = cfg.watch.extension {
        validate_extension(ext, "[watch].extension")?;
    }
    if let Some(ref cmd) = cfg.render.cmd {
        validate_command(cmd, "[render].cmd")?;
    }
    Ok(())
}

pub(crate) fn validate_interval_ms(ms: u64, origin: &str) -> Result<()> {
    if ms == 0 {
        return Err(QmdWatchError::ConfigError(format!(
            "{origin} must be >= 1 (got 0)"
        )));
    }
    Ok(())
}

pub(crate) fn validate_extension(ext: &str, origin: &str) -> Result<()> {
    if normalize_extension(ext).is_empty() {
        return Err(QmdWatchError::ConfigError(format!(
            "{origin} must not be empty"
        )));
    }
    Ok(())
}

pub(crate) fn validate_command(cmd: &str, origin: &str) -> Result<()> {
    if cmd.trim().is_empty() {
        return Err(QmdWatchError::ConfigError(format!(
            "{origin} must not be blank"
        )));
    }
    Ok(())
}

/// Strip surrounding whitespace and a single leading dot.
pub fn normalize_extension(ext: &str) -> &str {
    let ext = ext.trim();
    ext.strip_prefix('.').unwrap_or(ext)
}
