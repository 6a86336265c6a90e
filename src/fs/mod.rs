// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::errors::{QmdWatchError, Result};

pub mod mock;

/// Abstract filesystem interface.
///
/// The watcher only ever needs a path's modification time, so that is all
/// this exposes; tests swap in [`mock::MockFileSystem`].
pub trait FileSystem: Send + Sync + Debug {
    /// Modification time of `path`.
    ///
    /// A missing file is reported as [`QmdWatchError::TargetMissing`]; any
    /// other failure as [`QmdWatchError::TargetUnreadable`].
    fn modified(&self, path: &Path) -> Result<SystemTime>;

    fn exists(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn modified(&self, path: &Path) -> Result<SystemTime> {
        fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => QmdWatchError::TargetMissing(path.to_path_buf()),
                _ => QmdWatchError::TargetUnreadable {
                    path: path.to_path_buf(),
                    source,
                },
            })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
