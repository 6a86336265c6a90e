// src/fs/mock.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use super::FileSystem;
use crate::errors::{QmdWatchError, Result};

/// In-memory filesystem holding only modification times.
///
/// Clones share the same state, so a test can keep one handle to `touch`
/// files while the runtime owns another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, SystemTime>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, modified: SystemTime) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.as_ref().to_path_buf(), modified);
    }

    /// Set a new modification time; creates the file if needed.
    pub fn touch(&self, path: impl AsRef<Path>, modified: SystemTime) {
        self.add_file(path, modified);
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        files.remove(path.as_ref());
    }
}

impl FileSystem for MockFileSystem {
    fn modified(&self, path: &Path) -> Result<SystemTime> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .copied()
            .ok_or_else(|| QmdWatchError::TargetMissing(path.to_path_buf()))
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }
}
