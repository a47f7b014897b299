use chunky_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_DIR: &str = "chunkies";
pub const DEFAULT_CHUNK_PREFIX: &str = "chunk";
pub const DEFAULT_IGNORE_FILE_NAME: &str = ".chunkyignore";

/// Naming policy for one run: where artifacts go, how they are named,
/// and which file name declares ignore rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChunkPlan")]
pub struct ChunkPlan {
    output_dir: String,
    prefix: String,
    ignore_file_name: String,
}

impl ChunkPlan {
    /// Validate and build a plan. Each name must be a single path segment.
    pub fn new(
        output_dir: impl Into<String>,
        prefix: impl Into<String>,
        ignore_file_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let plan = Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
            ignore_file_name: ignore_file_name.into(),
        };
        validate_segment("output directory", &plan.output_dir)?;
        validate_segment("output prefix", &plan.prefix)?;
        validate_segment("ignore file name", &plan.ignore_file_name)?;
        if plan.output_dir == plan.ignore_file_name {
            return Err(DomainError::configuration(format!(
                "output directory and ignore file name must differ, both are '{}'",
                plan.output_dir
            )));
        }
        Ok(plan)
    }

    /// Root-relative name of the output subdirectory.
    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn ignore_file_name(&self) -> &str {
        &self.ignore_file_name
    }

    /// File name of the artifact for a 1-based chunk index: `<prefix>_<index>.txt`.
    pub fn artifact_name(&self, index: usize) -> String {
        format!("{}_{index}.txt", self.prefix)
    }
}

#[derive(Deserialize)]
struct RawChunkPlan {
    output_dir: String,
    prefix: String,
    ignore_file_name: String,
}

impl TryFrom<RawChunkPlan> for ChunkPlan {
    type Error = DomainError;

    fn try_from(raw: RawChunkPlan) -> Result<Self, Self::Error> {
        Self::new(raw.output_dir, raw.prefix, raw.ignore_file_name)
    }
}

impl Default for ChunkPlan {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            prefix: DEFAULT_CHUNK_PREFIX.to_string(),
            ignore_file_name: DEFAULT_IGNORE_FILE_NAME.to_string(),
        }
    }
}

fn validate_segment(field: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::configuration(format!("{field} must not be empty")));
    }
    if value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(DomainError::configuration(format!(
            "{field} must be a plain name without separators, got '{value}'"
        )));
    }
    Ok(())
}
