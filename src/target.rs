// src/target.rs

//! The document being watched: `<base_name>.<extension>`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::validate::normalize_extension;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDocument {
    base_name: String,
    extension: String,
    path: PathBuf,
}

impl TargetDocument {
    /// Build the target from a base name and an extension.
    ///
    /// The base name is used as-is: no trimming or validation, so an empty
    /// or odd name simply yields a path that later fails the existence check.
    pub fn new(base_name: impl Into<String>, extension: &str) -> Self {
        let base_name = base_name.into();
        let extension = normalize_extension(extension).to_string();
        let path = PathBuf::from(format!("{base_name}.{extension}"));
        Self {
            base_name,
            extension,
            path,
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TargetDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
