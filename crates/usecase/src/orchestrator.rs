use std::path::Path;

use chunky_domain::{Chunk, partition, render_chunk};
use chunky_ports::{
    filesystem::{ArtifactWriter, ContentReader, FileEnumerationPlan, FileEnumerator},
    progress::{NoopProgress, ProgressSink},
};
use chunky_shared_kernel::{ApplicationError, DomainError, ErrorContext, Result};
use log::{debug, info};

use crate::dto::{ChunkOutcome, ChunkReport, ChunkRequest};

/// Splits one directory tree into N artifacts.
pub struct ChunkFolder<'a> {
    enumerator: &'a dyn FileEnumerator,
    reader: &'a dyn ContentReader,
    writer: &'a dyn ArtifactWriter,
    progress: &'a dyn ProgressSink,
}

impl<'a> ChunkFolder<'a> {
    pub fn new(
        enumerator: &'a dyn FileEnumerator,
        reader: &'a dyn ContentReader,
        writer: &'a dyn ArtifactWriter,
    ) -> Self {
        Self { enumerator, reader, writer, progress: &NoopProgress }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Run the whole pipeline.
    ///
    /// Artifacts are rendered and written in index order, one batch at a time.
    /// The first failed write aborts the run before later chunks are read;
    /// artifacts written before it stay complete.
    pub fn run(&self, request: &ChunkRequest) -> Result<ChunkOutcome> {
        validate_root(&request.root)?;

        let plan = FileEnumerationPlan { root: request.root.clone(), plan: request.plan.clone() };
        let files = self.enumerator.collect(&plan).map_err(|err| ApplicationError::FileCollectionFailed {
            reason: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        debug!("{} file(s) eligible under {}", files.len(), request.root.display());

        let Some(chunks) = partition(files, request.count) else {
            info!("nothing to chunk under {}", request.root.display());
            return Ok(ChunkOutcome::NothingToDo);
        };

        let output_dir = request.root.join(request.plan.output_dir());
        let reports: Vec<ChunkReport> = chunks
            .iter()
            .map(|chunk| ChunkReport {
                index: chunk.index(),
                path: output_dir.join(request.plan.artifact_name(chunk.index())),
                file_count: chunk.len(),
            })
            .collect();

        if request.dry_run {
            for report in &reports {
                self.progress.on_chunk(report.index, &report.path, report.file_count)?;
            }
        } else {
            self.writer
                .ensure_dir(&output_dir)
                .with_context(|| format!("preparing output directory {}", output_dir.display()))?;
            // At most one batch of rendered artifacts is held in memory.
            let batch = render_batch_size();
            for (group, group_reports) in chunks.chunks(batch).zip(reports.chunks(batch)) {
                for (report, text) in group_reports.iter().zip(self.render_batch(group)) {
                    self.writer.write(&report.path, &text).map_err(|err| ApplicationError::ChunkWriteFailed {
                        index: report.index,
                        reason: err.to_string(),
                        source: Some(Box::new(err)),
                    })?;
                    self.progress.on_chunk(report.index, &report.path, report.file_count)?;
                }
            }
        }
        self.progress.on_complete()?;

        Ok(ChunkOutcome::Written(reports))
    }

    fn render_batch(&self, chunks: &[Chunk]) -> Vec<String> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            chunks.par_iter().map(|chunk| self.render(chunk)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            chunks.iter().map(|chunk| self.render(chunk)).collect()
        }
    }

    fn render(&self, chunk: &Chunk) -> String {
        render_chunk(chunk, |entry| self.reader.read_text(entry))
    }
}

/// Number of chunks rendered before any of them is written.
#[cfg(feature = "parallel")]
fn render_batch_size() -> usize {
    rayon::current_num_threads().max(1)
}

#[cfg(not(feature = "parallel"))]
fn render_batch_size() -> usize {
    1
}

fn validate_root(root: &Path) -> Result<()> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(DomainError::configuration(format!("'{}' is not a directory", root.display())).into()),
        Err(err) => {
            Err(DomainError::configuration(format!("cannot access '{}': {err}", root.display())).into())
        }
    }
}
