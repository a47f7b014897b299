// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;

pub use filesystem::{WalkFileEnumerator, load_registry};
pub use persistence::{FsArtifactWriter, FsContentReader};
