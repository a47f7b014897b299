// src/config.rs
use std::path::PathBuf;

use chunky_domain::{ChunkCount, ChunkPlan};
use chunky_shared_kernel::{ChunkyError, PresentationError, Result, path::logical_absolute};
use chunky_usecase::ChunkRequest;
use derive_builder::Builder;

use crate::cli::Args;

/// What the binary prints on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// One `Wrote ...` line per artifact.
    #[default]
    Text,
    /// A JSON summary once the run ends.
    Json,
    Quiet,
}

/// Fully validated settings for one invocation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Absolute root folder.
    pub root: PathBuf,
    pub count: ChunkCount,
    #[builder(default)]
    pub plan: ChunkPlan,
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub output: OutputStyle,
    #[builder(default)]
    pub verbosity: u8,
}

impl Config {
    pub fn request(&self) -> ChunkRequest {
        ChunkRequest {
            root: self.root.clone(),
            count: self.count,
            plan: self.plan.clone(),
            dry_run: self.dry_run,
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match (self.output, self.verbosity) {
            (OutputStyle::Quiet, _) => "error",
            (_, 0) => "warn",
            (_, 1) => "info",
            (_, 2) => "debug",
            _ => "trace",
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ChunkyError;

    fn try_from(args: Args) -> Result<Self> {
        let count = ChunkCount::try_from(args.chunks).map_err(|_| PresentationError::InvalidValue {
            flag: "--chunks".to_string(),
            value: args.chunks.to_string(),
            reason: format!("must be an integer from 1 to {}", ChunkCount::MAX),
        })?;
        let plan = ChunkPlan::new(args.output_dir, args.output_prefix, args.ignore_file)?;
        let output = if args.quiet {
            OutputStyle::Quiet
        } else if args.json {
            OutputStyle::Json
        } else {
            OutputStyle::Text
        };

        ConfigBuilder::default()
            .root(logical_absolute(&args.folder))
            .count(count)
            .plan(plan)
            .dry_run(args.dry_run)
            .output(output)
            .verbosity(args.verbose)
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()).into())
    }
}
