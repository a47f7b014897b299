// crates/shared-kernel/src/value_objects/file_entry.rs
use std::path::{Path, PathBuf};

use super::RelativePath;

/// A file selected for chunking: its absolute path plus the cached root-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    path: PathBuf,
    relative: RelativePath,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, relative: RelativePath) -> Self {
        Self { path: path.into(), relative }
    }

    /// Derive the relative path from `root`. Returns `None` for paths outside `root`,
    /// for the root itself, and for paths that are not valid UTF-8.
    pub fn under_root(root: &Path, path: PathBuf) -> Option<Self> {
        let relative = RelativePath::from_path(path.strip_prefix(root).ok()?)?;
        if relative.is_root() {
            return None;
        }
        Some(Self { path, relative })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn relative(&self) -> &RelativePath {
        &self.relative
    }
}
