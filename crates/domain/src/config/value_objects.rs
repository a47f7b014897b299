pub mod chunk_count;
pub mod chunk_plan;

pub use chunk_count::ChunkCount;
pub use chunk_plan::{ChunkPlan, DEFAULT_CHUNK_PREFIX, DEFAULT_IGNORE_FILE_NAME, DEFAULT_OUTPUT_DIR};
