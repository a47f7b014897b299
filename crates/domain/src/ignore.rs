//! Hierarchical ignore rules.
//!
//! Each directory may declare one ignore file. Its text is compiled into an
//! [`IgnoreSpec`] (an ordered list of [`IgnorePattern`]s, last match wins), and
//! all specs of a tree are collected into an [`IgnoreRegistry`] that resolves a
//! file against its ancestors, nearest directory first.

pub mod pattern;
pub mod registry;
pub mod spec;

pub use pattern::IgnorePattern;
pub use registry::IgnoreRegistry;
pub use spec::{Decision, IgnoreRules, IgnoreSpec};
