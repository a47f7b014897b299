pub mod value_objects;

pub use value_objects::{
    ChunkCount, ChunkPlan, DEFAULT_CHUNK_PREFIX, DEFAULT_IGNORE_FILE_NAME, DEFAULT_OUTPUT_DIR,
};
