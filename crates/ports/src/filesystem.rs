// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use chunky_domain::{ChunkPlan, FileList};
use chunky_shared_kernel::{FileEntry, Result};
use serde::{Deserialize, Serialize};

/// Input parameters controlling file enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEnumerationPlan {
    /// Absolute root of the tree to chunk.
    pub root: PathBuf,
    /// Output directory and ignore file naming.
    pub plan: ChunkPlan,
}

/// Port for enumerating the files of a tree after ignore rules are applied.
pub trait FileEnumerator: Send + Sync {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<FileList>;
}

/// Port for reading one selected file as UTF-8 text.
///
/// Errors are rendered inline by the serializer, so any `Display` message will do.
pub trait ContentReader: Send + Sync {
    fn read_text(&self, entry: &FileEntry) -> std::result::Result<String, String>;
}

/// Port for persisting rendered artifacts.
pub trait ArtifactWriter: Send + Sync {
    /// Create `dir` (and parents) if missing.
    fn ensure_dir(&self, dir: &Path) -> Result<()>;

    /// Replace the file at `path` with `contents` as a whole.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
