// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::WatchMode;

/// Command-line arguments for `qmdwatch`.
///
/// Every setting except `name` can also come from the config file; flags
/// given here win over it.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "qmdwatch",
    version,
    about = "Re-render a document whenever it changes on disk.",
    long_about = None
)]
pub struct CliArgs {
    /// Base name of the document, without extension.
    ///
    /// If omitted, the name is read interactively from stdin.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Extension of the document (default: `qmd`).
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Render command template; `{file}` is replaced by the document path.
    ///
    /// Default: `quarto render {file}`.
    #[arg(long = "cmd", value_name = "TEMPLATE")]
    pub command: Option<String>,

    /// Polling interval in milliseconds (default: 1000).
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// How changes are detected.
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<WatchMode>,

    /// Path to the config file (TOML).
    ///
    /// Default: `qmdwatch.toml` in the current working directory. A missing
    /// default file is fine; a missing explicit one is an error.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `QMDWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve settings and the target path, print them, but don't watch.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
