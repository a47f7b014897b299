pub mod chunk;
pub mod file_list;

pub use chunk::Chunk;
pub use chunky_shared_kernel::{FileEntry, RelativePath};
pub use file_list::FileList;
