// crates/shared-kernel/src/value_objects/relative_path.rs
use std::{fmt, ops::Deref, path::Path};

use serde::{Deserialize, Serialize};

/// Root-relative path with `/` separators on every platform.
///
/// Ordering and equality are plain string comparisons, which is what the
/// enumerator sorts by. The empty path denotes the root directory itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Build from a path that is already relative to the root.
    pub fn from_path(path: &Path) -> Option<Self> {
        crate::path::to_slash(path).map(Self)
    }

    /// Build from a `/`-separated string, dropping empty and `.` segments.
    pub fn from_slash(value: &str) -> Self {
        let joined = value
            .split('/')
            .filter(|seg| !seg.is_empty() && *seg != ".")
            .collect::<Vec<_>>()
            .join("/");
        Self(joined)
    }

    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment, or the empty string for the root.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Directory containing this path; the root's parent is the root.
    pub fn parent(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(parent, _)| parent)
    }

    /// Ancestor directories from the immediate parent up to the root (`""`).
    pub fn ancestors(&self) -> Ancestors<'_> {
        let next = if self.0.is_empty() { None } else { Some(self.parent()) };
        Ancestors { next }
    }

    /// The remainder of this path below `dir`, or `None` if it is not inside `dir`.
    ///
    /// `dir` is a root-relative directory; `""` means the root and yields the whole path.
    pub fn relative_to(&self, dir: &str) -> Option<&str> {
        if dir.is_empty() {
            return Some(&self.0);
        }
        self.0.strip_prefix(dir)?.strip_prefix('/')
    }

    /// True when this path is `dir` itself or lies below it.
    pub fn is_within(&self, dir: &str) -> bool {
        !dir.is_empty() && (self.0 == dir || self.relative_to(dir).is_some())
    }
}

impl Deref for RelativePath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(value: &str) -> Self {
        Self::from_slash(value)
    }
}

/// Iterator over the ancestor directories of a [`RelativePath`], closest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current.is_empty() {
            None
        } else {
            Some(current.rsplit_once('/').map_or("", |(parent, _)| parent))
        };
        Some(current)
    }
}
