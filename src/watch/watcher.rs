// src/watch/watcher.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info};

use crate::engine::RuntimeEvent;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a native filesystem watcher for `target`.
///
/// The target's parent directory is watched non-recursively, which also
/// catches editors that save by writing a temp file and renaming it over
/// the original, or by moving the original aside and writing a new one.
/// Only events that leave the target in place are forwarded as
/// `RuntimeEvent::FsEvent` (see [`matching_path`]); the runtime still
/// compares modification times before rendering.
pub fn spawn_notify_source(
    target: &Path,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let file_name = target
        .file_name()
        .map(|n| n.to_os_string())
        .with_context(|| format!("target {:?} has no file name", target))?;
    let dir = watch_dir(target);

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                // The forwarding task is gone once the runtime stops; late
                // events are dropped silently.
                if !event_tx.is_closed() {
                    let _ = event_tx.send(event);
                }
            }
            Err(err) => {
                eprintln!("qmdwatch: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching directory {:?}", dir))?;

    info!(dir = %dir.display(), file = ?file_name, "file watcher started");

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let Some(path) = matching_path(&event, &file_name) else {
                continue;
            };
            debug!(kind = ?event.kind, path = %path.display(), "target event");

            match runtime_tx.try_send(RuntimeEvent::FsEvent { path }) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    debug!("runtime busy; coalescing filesystem event");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("runtime channel closed; stopping file watcher loop");
                    return;
                }
            }
        }
        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Directory to watch for `target`; `.` for bare file names.
fn watch_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// The event path naming the target, if the event leaves the target in
/// place.
///
/// Forwarded: creation, content/metadata modification, and renames *to* the
/// target. Dropped: access, removal, and renames *away* from the target, so
/// a backup-style save (move original aside, write a new file) never makes
/// the runtime read a path that is momentarily missing. Backends that can't
/// tell the rename direction (`Name(Any)`, `EventKind::Any`) are forwarded
/// only if the target currently exists.
fn matching_path(event: &Event, file_name: &OsString) -> Option<PathBuf> {
    let is_target = |p: &&PathBuf| p.file_name() == Some(file_name.as_os_str());

    match event.kind {
        EventKind::Create(_)
        | EventKind::Modify(ModifyKind::Data(_))
        | EventKind::Modify(ModifyKind::Metadata(_))
        | EventKind::Modify(ModifyKind::Any)
        | EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
            event.paths.iter().find(is_target).cloned()
        }
        // Paths are `[from, to]`; only the destination counts.
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            event.paths.get(1).filter(is_target).cloned()
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::Any | RenameMode::Other))
        | EventKind::Any => event
            .paths
            .iter()
            .find(is_target)
            .filter(|p| p.exists())
            .cloned(),
        EventKind::Modify(ModifyKind::Name(RenameMode::From))
        | EventKind::Modify(ModifyKind::Other)
        | EventKind::Remove(_)
        | EventKind::Access(_)
        | EventKind::Other => None,
    }
}
