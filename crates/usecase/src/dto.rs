use std::path::PathBuf;

use chunky_domain::{ChunkCount, ChunkPlan};
use serde::{Deserialize, Serialize};

/// Everything one chunking run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRequest {
    /// Absolute root of the tree.
    pub root: PathBuf,
    pub count: ChunkCount,
    pub plan: ChunkPlan,
    /// Report what would be written without touching the output directory.
    #[serde(default)]
    pub dry_run: bool,
}

/// One artifact as written (or planned, on a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkReport {
    /// 1-based chunk index.
    pub index: usize,
    pub path: PathBuf,
    pub file_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// No file survived the ignore rules; nothing was created.
    NothingToDo,
    Written(Vec<ChunkReport>),
}

impl ChunkOutcome {
    pub fn reports(&self) -> &[ChunkReport] {
        match self {
            Self::NothingToDo => &[],
            Self::Written(reports) => reports,
        }
    }
}
