use std::collections::BTreeMap;

use chunky_shared_kernel::RelativePath;

use super::spec::{Decision, IgnoreRules, IgnoreSpec};
use crate::config::ChunkPlan;

/// Directory → rule set map for one tree, built once and then only queried.
///
/// Keys are root-relative directories (`""` is the root). Directories without
/// an ignore file have no entry.
#[derive(Debug, Clone)]
pub struct IgnoreRegistry<S = IgnoreSpec> {
    specs: BTreeMap<String, S>,
    ignore_file_name: String,
    output_dir: String,
}

impl<S: IgnoreRules> IgnoreRegistry<S> {
    pub fn new<I>(plan: &ChunkPlan, specs: I) -> Self
    where
        I: IntoIterator<Item = (RelativePath, S)>,
    {
        Self {
            specs: specs.into_iter().map(|(dir, spec)| (dir.as_str().to_string(), spec)).collect(),
            ignore_file_name: plan.ignore_file_name().to_string(),
            output_dir: plan.output_dir().to_string(),
        }
    }

    /// Registry with no ignore files; only the reserved exclusions apply.
    pub fn empty(plan: &ChunkPlan) -> Self {
        Self::new(plan, std::iter::empty())
    }

    /// Directories that declared an ignore file, in path order.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Ignore files themselves and anything under the output directory,
    /// regardless of what any rule says.
    pub fn is_reserved(&self, path: &RelativePath) -> bool {
        path.file_name() == self.ignore_file_name || path.is_within(&self.output_dir)
    }

    /// Resolve a file against its ancestors, nearest first.
    ///
    /// The first directory whose rules match (including a `!` negation) decides,
    /// with the path evaluated relative to that directory.
    pub fn is_ignored(&self, path: &RelativePath) -> bool {
        if self.is_reserved(path) {
            return true;
        }
        self.decide(path) == Some(Decision::Ignore)
    }

    /// The deciding rule outcome, ignoring reserved exclusions.
    pub fn decide(&self, path: &RelativePath) -> Option<Decision> {
        path.ancestors().find_map(|dir| {
            let spec = self.specs.get(dir)?;
            spec.decide(path.relative_to(dir)?)
        })
    }
}
