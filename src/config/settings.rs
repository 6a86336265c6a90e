// src/config/settings.rs

use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, DEFAULT_COMMAND, DEFAULT_EXTENSION, DEFAULT_INTERVAL_MS};
use crate::config::validate::{
    normalize_extension, validate_command, validate_extension, validate_interval_ms,
};
use crate::errors::Result;
use crate::types::WatchMode;

/// Fully resolved runtime settings.
///
/// Precedence per field: CLI flag, then config file, then built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Normalized extension (no leading dot).
    pub extension: String,
    /// Render command template.
    pub command: String,
    pub interval: Duration,
    pub mode: WatchMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            command: DEFAULT_COMMAND.to_string(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            mode: WatchMode::default(),
        }
    }
}

impl Settings {
    pub fn resolve(cfg: &ConfigFile, args: &CliArgs) -> Result<Self> {
        let extension = match (&args.ext, &cfg.watch.extension) {
            (Some(ext), _) => {
                validate_extension(ext, "--ext")?;
                ext.as_str()
            }
            (None, Some(ext)) => ext.as_str(),
            (None, None) => DEFAULT_EXTENSION,
        };

        let command = match (&args.command, &cfg.render.cmd) {
            (Some(cmd), _) => {
                validate_command(cmd, "--cmd")?;
                cmd.clone()
            }
            (None, Some(cmd)) => cmd.clone(),
            (None, None) => DEFAULT_COMMAND.to_string(),
        };

        let interval_ms = match args.interval_ms {
            Some(ms) => {
                validate_interval_ms(ms, "--interval-ms")?;
                ms
            }
            None => cfg.watch.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS),
        };

        let mode = args.mode.or(cfg.watch.mode).unwrap_or_default();

        Ok(Self {
            extension: normalize_extension(extension).to_string(),
            command,
            interval: Duration::from_millis(interval_ms),
            mode,
        })
    }
}
