//! Text layout of one chunk artifact.
//!
//! Every file is framed as
//!
//! ```text
//! <<<START: path/to/file>>>
//! <content>
//! <<<END: path/to/file>>>
//!
//! ```
//!
//! where the path is the `/`-separated path relative to the chunked root.
//! Content that cannot be read or decoded is replaced by a single
//! `[Error reading file: ...]` line; the markers are written either way.

use std::fmt::Display;

use chunky_shared_kernel::FileEntry;

use crate::model::Chunk;

pub const START_MARKER: &str = "<<<START: ";
pub const END_MARKER: &str = "<<<END: ";
pub const MARKER_CLOSE: &str = ">>>";

/// Render a chunk. `read` supplies each file's decoded content.
///
/// A failing `read` never aborts rendering; its error text is embedded instead.
/// An empty chunk renders as the empty string.
pub fn render_chunk<F, E>(chunk: &Chunk, mut read: F) -> String
where
    F: FnMut(&FileEntry) -> Result<String, E>,
    E: Display,
{
    let mut out = String::new();
    for entry in chunk {
        render_entry(&mut out, entry, read(entry));
    }
    out
}

/// Append one framed file to `out`.
pub fn render_entry<E: Display>(out: &mut String, entry: &FileEntry, content: Result<String, E>) {
    let rel = entry.relative().as_str();
    out.push_str(START_MARKER);
    out.push_str(rel);
    out.push_str(MARKER_CLOSE);
    out.push('\n');
    match content {
        Ok(text) => out.push_str(&text),
        Err(err) => {
            out.push_str("[Error reading file: ");
            out.push_str(&err.to_string());
            out.push_str("]\n");
        }
    }
    out.push('\n');
    out.push_str(END_MARKER);
    out.push_str(rel);
    out.push_str(MARKER_CLOSE);
    out.push_str("\n\n");
}
