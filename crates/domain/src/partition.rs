use crate::{
    config::ChunkCount,
    model::{Chunk, FileList},
};

/// Deal files round-robin into `count` chunks.
///
/// The file at position `p` lands in chunk `p % count` (0-based), keeping
/// FileList order inside each chunk. Balance is by file count only; sizes are
/// not considered. Returns `None` for an empty list so the caller can stop
/// before creating anything. With more chunks than files the tail chunks are empty.
pub fn partition(files: FileList, count: ChunkCount) -> Option<Vec<Chunk>> {
    if files.is_empty() {
        return None;
    }

    let n = count.get();
    let per_chunk = files.len().div_ceil(n);
    let mut groups: Vec<Vec<_>> = (0..n).map(|_| Vec::with_capacity(per_chunk)).collect();
    for (position, entry) in files.into_iter().enumerate() {
        groups[position % n].push(entry);
    }

    Some(
        groups
            .into_iter()
            .enumerate()
            .map(|(idx, entries)| Chunk::new(idx + 1, entries))
            .collect(),
    )
}
