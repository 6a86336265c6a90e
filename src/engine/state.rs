// src/engine/state.rs

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::errors::Result;
use crate::fs::FileSystem;

/// The single piece of state the watcher owns.
///
/// `last_modified` is the modification time that was most recently acted
/// upon. It only moves forward through [`WatchState::record_render`], i.e.
/// after a render for that value has been triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchState {
    target_path: PathBuf,
    last_modified: SystemTime,
}

impl WatchState {
    pub fn new(target_path: impl Into<PathBuf>, last_modified: SystemTime) -> Self {
        Self {
            target_path: target_path.into(),
            last_modified,
        }
    }

    /// Seed the state from the file's current modification time.
    ///
    /// Fails with `TargetMissing` when the file does not exist, so the
    /// watch loop is never entered for a bad path.
    pub fn initialize(fs: &dyn FileSystem, target_path: impl Into<PathBuf>) -> Result<Self> {
        let target_path = target_path.into();
        let last_modified = fs.modified(&target_path)?;
        Ok(Self::new(target_path, last_modified))
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    /// Whether `observed` differs from the last acted-upon value.
    ///
    /// Any difference counts, including a time that moved backwards.
    pub fn is_changed(&self, observed: SystemTime) -> bool {
        observed != self.last_modified
    }

    pub fn record_render(&mut self, modified: SystemTime) {
        self.last_modified = modified;
    }
}
