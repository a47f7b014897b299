#![allow(clippy::multiple_crate_versions)]

pub mod artifact;
pub mod config;
pub mod ignore;
pub mod model;
pub mod partition;

pub use artifact::render_chunk;
pub use config::{ChunkCount, ChunkPlan};
pub use ignore::{Decision, IgnorePattern, IgnoreRegistry, IgnoreRules, IgnoreSpec};
pub use model::{Chunk, FileList};
pub use partition::partition;
