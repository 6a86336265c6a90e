use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// How the runtime learns that it should look at the target again.
///
/// - `Poll`: wake up on a fixed interval and compare modification times
///   (default, matches the classic behaviour).
/// - `Notify`: wake up on native filesystem notifications for the target.
///   The modification-time comparison still decides whether to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WatchMode {
    Poll,
    Notify,
}

impl Default for WatchMode {
    fn default() -> Self {
        WatchMode::Poll
    }
}

impl fmt::Display for WatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchMode::Poll => f.write_str("poll"),
            WatchMode::Notify => f.write_str("notify"),
        }
    }
}
