// src/presentation.rs
use std::{
    io::{self, Write},
    path::Path,
};

use chunky_ports::progress::ProgressSink;
use chunky_shared_kernel::Result;
use chunky_usecase::{ChunkOutcome, ChunkReport};
use serde::Serialize;

use crate::{AppInfo, config::OutputStyle};

pub const NOTHING_TO_DO: &str = "No files found for chunking after applying ignore rules.";

/// Prints one line per artifact as the run progresses.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgress {
    style: OutputStyle,
    dry_run: bool,
}

impl ConsoleProgress {
    pub fn new(style: OutputStyle, dry_run: bool) -> Self {
        Self { style, dry_run }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_chunk(&self, _index: usize, path: &Path, file_count: usize) -> Result<()> {
        if self.style != OutputStyle::Text {
            return Ok(());
        }
        let verb = if self.dry_run { "Would write" } else { "Wrote" };
        let mut out = io::stdout().lock();
        writeln!(out, "{verb} {file_count} files to {}", path.display())?;
        Ok(())
    }

    fn on_complete(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    #[serde(flatten)]
    app: AppInfo,
    dry_run: bool,
    chunks: &'a [ChunkReport],
}

/// Final output once the run has finished.
pub fn print_outcome(outcome: &ChunkOutcome, style: OutputStyle, dry_run: bool, app: AppInfo) -> Result<()> {
    let mut out = io::stdout().lock();
    write_outcome(&mut out, outcome, style, dry_run, app)
}

fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &ChunkOutcome,
    style: OutputStyle,
    dry_run: bool,
    app: AppInfo,
) -> Result<()> {
    match style {
        OutputStyle::Quiet => {}
        OutputStyle::Text => {
            if *outcome == ChunkOutcome::NothingToDo {
                writeln!(out, "{NOTHING_TO_DO}")?;
            }
        }
        OutputStyle::Json => {
            let summary = JsonSummary { app, dry_run, chunks: outcome.reports() };
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
