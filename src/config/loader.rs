// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "qmdwatch.toml";

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// value checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the config for a run from the working directory.
///
/// - An explicit path must exist.
/// - Without one, `qmdwatch.toml` is used if present, otherwise an empty
///   config (all built-in defaults).
pub fn load_optional(explicit: Option<&Path>) -> Result<ConfigFile> {
    load_optional_in(Path::new("."), explicit)
}

/// Like [`load_optional`], but looks for the default file in `base_dir`.
///
/// An explicit path is used as given, not joined onto `base_dir`.
pub fn load_optional_in(base_dir: &Path, explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_and_validate(path);
    }

    let path = base_dir.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        debug!(path = %path.display(), "loading default config file");
        load_and_validate(&path)
    } else {
        debug!(dir = %base_dir.display(), "no config file found; using built-in defaults");
        Ok(ConfigFile::empty())
    }
}
