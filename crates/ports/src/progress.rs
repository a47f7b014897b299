// crates/ports/src/progress.rs
use std::path::Path;

use chunky_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    /// Called once per chunk after its artifact is written (or would be, on a dry run).
    fn on_chunk(&self, index: usize, path: &Path, file_count: usize) -> Result<()>;
    fn on_complete(&self) -> Result<()>;
}

/// Sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn on_chunk(&self, _index: usize, _path: &Path, _file_count: usize) -> Result<()> {
        Ok(())
    }

    fn on_complete(&self) -> Result<()> {
        Ok(())
    }
}
