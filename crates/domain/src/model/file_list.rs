use std::slice;

use chunky_shared_kernel::FileEntry;

/// Files selected for one run, sorted ascending by relative path with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    /// Sort by relative path and drop repeated relative paths, keeping the first.
    pub fn from_entries(entries: impl IntoIterator<Item = FileEntry>) -> Self {
        let mut entries: Vec<FileEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.relative().cmp(b.relative()));
        entries.dedup_by(|later, earlier| later.relative() == earlier.relative());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }
}

impl IntoIterator for FileList {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
