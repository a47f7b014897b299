// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::Read,
    path::Path,
};

use chunky_ports::filesystem::ContentReader;
use chunky_shared_kernel::FileEntry;
use log::debug;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the entire file and require it to be UTF-8.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        let bytes = Self::read_to_end(path)?;
        String::from_utf8(bytes).map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }
}

/// Reads selected files from disk as UTF-8 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsContentReader;

impl FsContentReader {
    pub fn new() -> Self {
        Self
    }
}

impl ContentReader for FsContentReader {
    fn read_text(&self, entry: &FileEntry) -> Result<String, String> {
        FileReader::read_to_string(entry.path()).map_err(|err| {
            debug!("cannot read {}: {err}", entry.path().display());
            err.to_string()
        })
    }
}
