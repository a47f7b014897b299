//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: enumerate, partition, render and write one tree
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{ChunkOutcome, ChunkReport, ChunkRequest};
pub use orchestrator::ChunkFolder;
