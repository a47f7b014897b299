// crates/infra/src/filesystem.rs
use std::{ffi::OsStr, path::Path};

use chunky_domain::{ChunkPlan, FileList, IgnoreRegistry, IgnoreSpec};
use chunky_ports::filesystem::{FileEnumerationPlan, FileEnumerator};
use chunky_shared_kernel::{FileEntry, InfrastructureError, RelativePath, Result};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace, warn};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileEnumerator` port.
///
/// Runs two walks over the tree: the first loads every ignore file into an
/// [`IgnoreRegistry`], the second selects the regular files the registry keeps.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(plan: &FileEnumerationPlan) -> Result<FileList> {
        let registry = load_registry(&plan.root, &plan.plan)?;
        select_files(&plan.root, &plan.plan, &registry)
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<FileList> {
        Self::enumerate(plan)
    }
}

/// Read every ignore file under `root` (outside the output directory) and key it
/// by the directory that holds it.
///
/// Malformed lines are logged and skipped. An ignore file that cannot be read
/// as UTF-8 text aborts the run.
pub fn load_registry(root: &Path, plan: &ChunkPlan) -> Result<IgnoreRegistry> {
    let mut specs = Vec::new();
    for entry in walk(root, plan) {
        let entry = entry?;
        if !is_regular_file(&entry) || entry.file_name() != OsStr::new(plan.ignore_file_name()) {
            continue;
        }
        let path = entry.path();
        let Some(dir) = path.parent().and_then(|p| p.strip_prefix(root).ok()).and_then(RelativePath::from_path)
        else {
            warn!("skipping ignore file with a non UTF-8 path: {}", path.display());
            continue;
        };

        let text = FileReader::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        let spec = IgnoreSpec::parse(&text);
        for rejected in spec.rejected() {
            warn!("{}: {rejected}", path.display());
        }
        debug!("loaded {} pattern(s) from {}", spec.patterns().len(), path.display());
        specs.push((dir, spec));
    }
    let registry = IgnoreRegistry::new(plan, specs);
    debug!("{} ignore file(s) under {}", registry.len(), root.display());
    Ok(registry)
}

fn select_files(root: &Path, plan: &ChunkPlan, registry: &IgnoreRegistry) -> Result<FileList> {
    let mut entries = Vec::new();
    for entry in walk(root, plan) {
        let entry = entry?;
        if !is_regular_file(&entry) {
            continue;
        }
        let Some(file) = FileEntry::under_root(root, entry.path().to_path_buf()) else {
            warn!("skipping file with a non UTF-8 path: {}", entry.path().display());
            continue;
        };
        if registry.is_ignored(file.relative()) {
            trace!("ignored {}", file.relative());
            continue;
        }
        entries.push(file);
    }

    let files = FileList::from_entries(entries);
    debug!("selected {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

// Hidden files and VCS ignore files get no special treatment, symlinks are not
// followed, and the root-level output directory is pruned before descent.
fn walk(root: &Path, plan: &ChunkPlan) -> impl Iterator<Item = Result<DirEntry>> {
    let output_dir = plan.output_dir().to_owned();
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !(entry.depth() == 1 && entry.file_name() == OsStr::new(&output_dir)));

    let root = root.to_path_buf();
    builder.build().filter_map(move |result| match result {
        Ok(entry) => Some(Ok(entry)),
        Err(err) if err.depth() == Some(0) => {
            Some(Err(InfrastructureError::Walk { path: root.clone(), details: err.to_string() }.into()))
        }
        Err(err) => {
            warn!("walk error: {err}");
            None
        }
    })
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}
