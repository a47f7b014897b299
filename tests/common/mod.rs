// tests/common/mod.rs
//! Shared test utilities


#[allow(unused_imports)]
pub use temp::TempTree;
