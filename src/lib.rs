// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod presentation;
pub mod version;

pub use app::{execute, run};
pub use config::{Config, ConfigBuilder, OutputStyle};
pub use version::{AppInfo, VERSION};
