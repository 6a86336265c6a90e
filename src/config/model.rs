// src/config/model.rs

use serde::Deserialize;

use crate::types::WatchMode;

/// Built-in render command, matching the classic Quarto workflow.
pub const DEFAULT_COMMAND: &str = "quarto render {file}";

/// Built-in document extension.
pub const DEFAULT_EXTENSION: &str = "qmd";

/// Built-in polling interval.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [watch]
/// extension = "qmd"
/// interval_ms = 1000
/// mode = "poll"
///
/// [render]
/// cmd = "quarto render {file}"
/// ```
///
/// All sections and keys are optional; unset keys fall back to CLI flags or
/// the built-in defaults when [`Settings`](crate::config::Settings) are
/// resolved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: WatchSection,

    #[serde(default)]
    pub render: RenderSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchSection {
    /// Document extension, with or without a leading dot.
    #[serde(default)]
    pub extension: Option<String>,

    /// Polling interval in milliseconds. Must be >= 1.
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// `"poll"` or `"notify"`.
    #[serde(default)]
    pub mode: Option<WatchMode>,
}

/// `[render]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderSection {
    /// Command template. `{file}` is replaced by the document path; if it
    /// does not appear, the path is appended.
    #[serde(default)]
    pub cmd: Option<String>,
}

/// Validated configuration.
///
/// Only constructible through `TryFrom<RawConfigFile>` (see `validate.rs`)
/// or [`ConfigFile::empty`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub watch: WatchSection,
    pub render: RenderSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(watch: WatchSection, render: RenderSection) -> Self {
        Self { watch, render }
    }

    /// Configuration used when no config file exists.
    pub fn empty() -> Self {
        Self::default()
    }
}
