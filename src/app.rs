// src/app.rs
use anyhow::Result;
use chunky_infra::{FsArtifactWriter, FsContentReader, WalkFileEnumerator};
use chunky_usecase::{ChunkFolder, ChunkOutcome};
use log::info;

use crate::{AppInfo, cli, config::Config, presentation};

/// Binary entry point: parse arguments, set up logging, chunk, report.
pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    init_logging(&config);

    let app = AppInfo::current();
    info!("{app}: chunking {} into {} chunk(s)", config.root.display(), config.count);

    let outcome = execute(&config)?;
    presentation::print_outcome(&outcome, config.output, config.dry_run, app)?;
    Ok(())
}

/// Run one chunking pass with the filesystem adapters, printing progress per `config.output`.
pub fn execute(config: &Config) -> chunky_shared_kernel::Result<ChunkOutcome> {
    let enumerator = WalkFileEnumerator::new();
    let reader = FsContentReader::new();
    let writer = FsArtifactWriter::new();
    let progress = presentation::ConsoleProgress::new(config.output, config.dry_run);

    ChunkFolder::new(&enumerator, &reader, &writer)
        .with_progress(&progress)
        .run(&config.request())
}

fn init_logging(config: &Config) {
    // Another logger may already be installed when embedded; keep it.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .format_timestamp(None)
        .try_init();
}
