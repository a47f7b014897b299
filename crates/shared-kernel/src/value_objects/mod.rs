// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_entry;
pub mod relative_path;

pub use file_entry::FileEntry;
pub use relative_path::{Ancestors, RelativePath};
