use std::slice;

use chunky_shared_kernel::FileEntry;

/// One group of the partition, in FileList order, with its 1-based index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    index: usize,
    entries: Vec<FileEntry>,
}

impl Chunk {
    pub fn new(index: usize, entries: Vec<FileEntry>) -> Self {
        Self { index, entries }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
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
}

impl<'a> IntoIterator for &'a Chunk {
    type Item = &'a FileEntry;
    type IntoIter = slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
