// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use chunky_ports::filesystem::ArtifactWriter;
use chunky_shared_kernel::{InfrastructureError, Result};
use log::debug;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

        // Temp file lives next to the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let written = Self::write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    }
}

/// Persists artifacts on the local filesystem, replacing each target whole.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsArtifactWriter;

impl FsArtifactWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactWriter for FsArtifactWriter {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "create_dir_all".to_string(),
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        debug!("writing {} bytes to {}", contents.len(), path.display());
        FileWriter::atomic_write(path, contents.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        Ok(())
    }
}
