// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod prompt;
pub mod status;
pub mod target;
pub mod types;
pub mod watch;

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_optional, Settings};
use crate::engine::{CoreWatcher, Runtime, RuntimeEvent, WatchState};
use crate::exec::{expand_command, ShellRenderer};
use crate::fs::{FileSystem, RealFileSystem};
use crate::status::StatusReporter;
use crate::target::TargetDocument;
use crate::types::WatchMode;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + CLI merge
/// - the document name (flag or interactive prompt)
/// - initial modification time (fails fast if the document is missing)
/// - change source (polling or `notify`)
/// - shell renderer
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_optional(args.config.as_deref().map(Path::new))
        .context("loading configuration")?;
    let settings = Settings::resolve(&cfg, &args)?;
    debug!(?settings, "resolved settings");

    let base_name = match args.name.clone() {
        Some(name) => name,
        None => prompt::read_base_name(io::stdin().lock(), io::stdout())?,
    };
    let target = TargetDocument::new(base_name, &settings.extension);

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if args.dry_run {
        print_dry_run(&settings, &target, fs.as_ref());
        return Ok(());
    }

    let state = WatchState::initialize(fs.as_ref(), target.path())?;

    let mut status = StatusReporter::stdout();
    status.monitoring(target.path())?;

    // Capacity 1: change sources coalesce wake-ups while a render runs.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(1);

    let _watcher_handle = match settings.mode {
        WatchMode::Poll => {
            watch::spawn_polling_source(settings.interval, rt_tx.clone());
            None
        }
        WatchMode::Notify => Some(watch::spawn_notify_source(target.path(), rt_tx.clone())?),
    };

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }
    drop(rt_tx);

    info!(path = %target, mode = %settings.mode, "watching document");

    let renderer = ShellRenderer::new(settings.command.clone());
    let runtime = Runtime::new(CoreWatcher::new(state), fs, renderer, status, rt_rx);
    runtime.run().await?;
    Ok(())
}

/// Print resolved settings without watching.
fn print_dry_run(settings: &Settings, target: &TargetDocument, fs: &dyn FileSystem) {
    println!("qmdwatch dry-run");
    println!("  target   = {target}");
    println!("  exists   = {}", fs.exists(target.path()));
    println!("  mode     = {}", settings.mode);
    println!("  interval = {}ms", settings.interval.as_millis());
    println!("  command  = {}", expand_command(&settings.command, target.path()));

    debug!("dry-run complete (no watching)");
}
